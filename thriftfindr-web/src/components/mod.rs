pub mod carousel;
pub mod category_pills;
pub mod footer;
pub mod form_field;
pub mod header;
pub mod item_card;
pub mod item_detail_modal;
pub mod layout;
pub mod modal;
pub mod new_item_modal;
pub mod pagination;
pub mod status;
pub mod store_card;
pub mod store_registration_modal;
