//! Description fragments, composed in fixed order by the engine.
//!
//! Each fragment is its own function so the pieces are testable in
//! isolation; the final text is a plain ordered concatenation of
//! opening, body, features block, closing, boilerplate and call to action.

use crate::engine::BrandMatch;
use crate::knowledge::CategoryTemplate;

/// Header preceding the feature bullet list.
pub const FEATURES_HEADER: &str = "\n\n✨ **Características destacadas:**\n";

/// Fixed trailing block, identical for every product.
pub const BOILERPLATE: &str = "\n\n📦 **Información adicional:**\n\
• Producto importado de alta calidad\n\
• Envío rápido y seguro\n\
• Garantía de satisfacción\n\
• Atención personalizada\n";

/// Fixed contact invitation appended last.
pub const CALL_TO_ACTION: &str = "\n💬 **¡Consultanos por WhatsApp para más información!**";

/// Template intro followed by the literal product name.
#[must_use]
pub fn opening(template: &CategoryTemplate, name: &str) -> String {
    format!("{} {name}. ", template.intro)
}

/// Brand description, plus one sentence naming the model when one matched.
#[must_use]
pub fn brand_body(found: &BrandMatch) -> String {
    let mut body = format!("{} ", found.entry.description);
    if let Some(model) = found.model {
        body.push_str(&format!(
            "El modelo {model} es reconocido por su calidad excepcional y diseño distintivo. "
        ));
    }
    body
}

/// Generic body referencing the literal category and subcategory values.
#[must_use]
pub fn generic_body(category: &str, subcategory: &str) -> String {
    format!(
        "Este producto de la categoría {category} - {subcategory} ha sido seleccionado por su calidad excepcional y diseño atractivo. "
    )
}

/// Bulleted feature list under [`FEATURES_HEADER`], one `•` line per phrase.
#[must_use]
pub fn features_block(features: &[&str]) -> String {
    let mut block = String::from(FEATURES_HEADER);
    for feature in features {
        block.push_str(&format!("• {feature}\n"));
    }
    block
}

/// Template closing sentence on its own line.
#[must_use]
pub fn closing(template: &CategoryTemplate) -> String {
    format!("\n{}", template.closing)
}
