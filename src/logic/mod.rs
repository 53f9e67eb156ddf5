//! Core browsing logic: pagination, tag filtering, cursor movement and the
//! render-branch state machine. Everything here operates on `AppState` and
//! never touches the terminal or the network directly.

pub mod filter;
pub mod paging;
pub mod selection;
pub mod view;

pub use filter::{clear_tag_filter, reload, request_recipes, select_tag};
pub use paging::{displayed, next_limit, see_more};
pub use selection::{
    activate_tag_index, activate_tag_row, card_to_edge, clamp_card_cursor, focused_recipe,
    move_card, move_tag_cursor,
};
pub use view::{
    ViewState, close_detail, is_empty_state, is_refreshing, show_detail, toggle_theme, view_state,
};
