pub mod daemon;
pub mod item_add;
pub mod item_complete;
pub mod item_delete;
pub mod item_edit;
pub mod item_list;
