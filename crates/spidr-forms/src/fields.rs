pub mod char_field;
pub mod email_field;
pub mod float_field;
pub mod regex_field;

pub use char_field::CharField;
pub use email_field::EmailField;
pub use float_field::FloatField;
pub use regex_field::RegexField;
