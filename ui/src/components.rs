pub mod booking_modal;
pub mod chat_widget;
pub mod dialog;
pub mod header;
pub mod hero;
pub mod reveal;
pub mod sticky_bar;
