//! WhatsApp quote message generator module.

mod currency;
mod whatsapp;

pub use currency::format_currency;
pub use whatsapp::generate_whatsapp_text;
