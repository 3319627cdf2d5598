//! Form fields and their rendering
//!
//! The widget helpers decorate ordinary form controls. This module holds the
//! field model they decorate and the renderer that turns it into markup.
//!
//! ```rust
//! use zuluru_widgets::forms::{FormField, FormRenderer};
//!
//! let field = FormField::select("province")
//!     .label("Province")
//!     .empty("(choose)")
//!     .option("ON", "Ontario")
//!     .option("QC", "Quebec");
//!
//! let html = FormRenderer::render(&field);
//! assert!(html.contains(r#"<option value="ON">Ontario</option>"#));
//! ```

mod field;
mod render;

pub use field::{FieldFlags, FieldKind, FormField, InputType, SelectOption};
pub use render::{FormRenderOptions, FormRenderer};
