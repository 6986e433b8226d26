//! Static brand and category knowledge tables.
//!
//! Both tables are ordered slices, not maps: detection and resolution scan
//! them in declaration order, and that order IS the precedence policy. Keys
//! and model keywords are lowercase and matched as substrings of the
//! lowercased product name.

use serde::Serialize;

/// Static knowledge about one recognized brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandEntry {
    /// Lowercase key checked as a substring of the lowercased product name.
    pub key: &'static str,
    /// Product-line keywords, scanned in order; first containing match wins.
    pub model_keywords: &'static [&'static str],
    /// One-paragraph brand description, used verbatim in the output.
    pub description: &'static str,
    /// Brand-specific feature phrases for the features block.
    pub features: &'static [&'static str],
}

/// Static intro/features/closing text for one product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTemplate {
    /// Exact, case-sensitive category key.
    pub category: &'static str,
    pub intro: &'static str,
    /// Generic feature phrases used when no brand was detected.
    pub features: &'static [&'static str],
    pub closing: &'static str,
}

/// Recognized brands, in precedence order. When a product name contains more
/// than one brand key, the first entry here wins regardless of where each key
/// appears in the name.
pub const BRAND_DATABASE: &[BrandEntry] = &[
    BrandEntry {
        key: "nike",
        model_keywords: &[
            "air max", "air force", "dunk", "jordan", "blazer", "cortez", "react", "zoom",
        ],
        description: "Nike es la marca líder mundial en calzado deportivo, conocida por su innovación, comodidad y estilo icónico.",
        features: &[
            "Tecnología Air",
            "Suela antideslizante",
            "Materiales premium",
            "Diseño ergonómico",
        ],
    },
    BrandEntry {
        key: "adidas",
        model_keywords: &["stan smith", "superstar", "gazelle", "ultraboost", "nmd", "yeezy"],
        description: "Adidas combina rendimiento deportivo con estilo urbano, ofreciendo calzado de alta calidad.",
        features: &[
            "Tecnología Boost",
            "Suela de goma",
            "Diseño clásico",
            "Comodidad superior",
        ],
    },
    BrandEntry {
        key: "puma",
        model_keywords: &["suede", "basket", "cali", "rs-x", "future"],
        description: "Puma ofrece calzado deportivo con diseño moderno y tecnología avanzada.",
        features: &[
            "Suela deportiva",
            "Materiales duraderos",
            "Estilo contemporáneo",
        ],
    },
    BrandEntry {
        key: "chanel",
        model_keywords: &["no. 5", "coco", "chance", "bleu", "gabrielle"],
        description: "Chanel es sinónimo de elegancia y sofisticación en el mundo de la perfumería de lujo.",
        features: &[
            "Fragancia de larga duración",
            "Notas exclusivas",
            "Presentación elegante",
            "Calidad premium",
        ],
    },
    BrandEntry {
        key: "dior",
        model_keywords: &["sauvage", "jadore", "miss dior", "poison"],
        description: "Dior representa la excelencia francesa en perfumería con fragancias icónicas.",
        features: &[
            "Esencias naturales",
            "Fragancia intensa",
            "Diseño exclusivo",
        ],
    },
    BrandEntry {
        key: "pandora",
        model_keywords: &["charm", "anillo", "pulsera", "collar"],
        description: "Pandora ofrece joyería personalizable de alta calidad con diseños únicos.",
        features: &[
            "Plata de ley",
            "Diseño personalizable",
            "Acabado premium",
        ],
    },
    BrandEntry {
        key: "tefal",
        model_keywords: &["ingenio", "expertise", "ceramic"],
        description: "Tefal es líder en utensilios de cocina con tecnología antiadherente.",
        features: &[
            "Recubrimiento antiadherente",
            "Distribución uniforme del calor",
            "Fácil limpieza",
        ],
    },
];

const ROPA: CategoryTemplate = CategoryTemplate {
    category: "Ropa",
    intro: "Viste con estilo y comodidad",
    features: &[
        "Materiales de calidad premium",
        "Diseño moderno y versátil",
        "Corte perfecto",
        "Ideal para múltiples ocasiones",
    ],
    closing: "Una prenda esencial para tu guardarropa.",
};

/// Per-category description templates, exact-matched on `category`.
pub const CATEGORY_TEMPLATES: &[CategoryTemplate] = &[
    CategoryTemplate {
        category: "Zapatillas",
        intro: "Descubre el estilo y la comodidad con estas zapatillas",
        features: &[
            "Diseño moderno y versátil",
            "Comodidad para uso diario",
            "Materiales de calidad",
            "Perfectas para cualquier ocasión",
        ],
        closing: "Ideales para complementar tu look casual o deportivo.",
    },
    CategoryTemplate {
        category: "Perfumería",
        intro: "Envuélvete en una fragancia única y cautivadora",
        features: &[
            "Fragancia de larga duración",
            "Notas aromáticas equilibradas",
            "Presentación elegante",
            "Perfecto para cualquier momento",
        ],
        closing: "Una fragancia que define tu personalidad y estilo.",
    },
    CategoryTemplate {
        category: "Joyas",
        intro: "Realza tu belleza con esta pieza de joyería excepcional",
        features: &[
            "Materiales de alta calidad",
            "Diseño elegante y sofisticado",
            "Acabado impecable",
            "Perfecto para ocasiones especiales",
        ],
        closing: "Una joya que complementa tu estilo único.",
    },
    ROPA,
    CategoryTemplate {
        category: "Blanquería",
        intro: "Transforma tu hogar en un espacio de confort y elegancia",
        features: &[
            "Materiales suaves y duraderos",
            "Diseño moderno",
            "Fácil cuidado",
            "Calidad superior",
        ],
        closing: "Perfecto para crear un ambiente acogedor en tu hogar.",
    },
    CategoryTemplate {
        category: "Carteras y Bolsos",
        intro: "Combina funcionalidad y estilo en cada ocasión",
        features: &[
            "Materiales resistentes",
            "Diseño práctico y elegante",
            "Múltiples compartimentos",
            "Versatilidad de uso",
        ],
        closing: "El complemento perfecto para tu look diario.",
    },
    CategoryTemplate {
        category: "Electrodomésticos",
        intro: "Facilita tu vida diaria con tecnología de vanguardia",
        features: &[
            "Tecnología avanzada",
            "Fácil uso",
            "Diseño moderno",
            "Eficiencia energética",
        ],
        closing: "La solución perfecta para tu hogar moderno.",
    },
    CategoryTemplate {
        category: "Ollas y Accesorios de Cocina",
        intro: "Cocina como un profesional con estos utensilios de calidad",
        features: &[
            "Materiales de grado alimentario",
            "Distribución uniforme del calor",
            "Fácil limpieza",
            "Durabilidad garantizada",
        ],
        closing: "Esenciales para cualquier cocina moderna.",
    },
    CategoryTemplate {
        category: "Juguetes y Peluches",
        intro: "Diversión y alegría garantizada",
        features: &[
            "Materiales seguros",
            "Diseño atractivo",
            "Estimula la creatividad",
            "Horas de entretenimiento",
        ],
        closing: "Perfecto para crear momentos especiales y memorables.",
    },
];

/// Template used for empty or unrecognized categories (the clothing entry).
pub const FALLBACK_TEMPLATE: &CategoryTemplate = &ROPA;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn brand_keys_are_lowercase_and_non_empty() {
        for entry in BRAND_DATABASE {
            assert!(!entry.key.is_empty(), "empty brand key");
            assert_eq!(
                entry.key,
                entry.key.to_lowercase(),
                "brand key '{}' must be lowercase",
                entry.key
            );
        }
    }

    #[test]
    fn model_keywords_are_lowercase_and_non_empty() {
        for entry in BRAND_DATABASE {
            for keyword in entry.model_keywords {
                assert!(!keyword.is_empty(), "empty model keyword for '{}'", entry.key);
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "model keyword '{keyword}' of '{}' must be lowercase",
                    entry.key
                );
            }
        }
    }

    #[test]
    fn brand_keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in BRAND_DATABASE {
            assert!(seen.insert(entry.key), "duplicate brand key '{}'", entry.key);
        }
    }

    #[test]
    fn category_keys_are_unique() {
        let mut seen = HashSet::new();
        for template in CATEGORY_TEMPLATES {
            assert!(
                seen.insert(template.category),
                "duplicate category '{}'",
                template.category
            );
        }
    }

    #[test]
    fn fallback_is_the_clothing_template() {
        assert_eq!(FALLBACK_TEMPLATE.category, "Ropa");
        assert!(
            CATEGORY_TEMPLATES.contains(FALLBACK_TEMPLATE),
            "fallback template must also be resolvable by exact match"
        );
    }

    #[test]
    fn every_brand_has_description_and_features() {
        for entry in BRAND_DATABASE {
            assert!(!entry.description.is_empty());
            assert!(!entry.features.is_empty());
        }
    }

    #[test]
    fn every_template_has_intro_features_closing() {
        for template in CATEGORY_TEMPLATES {
            assert!(!template.intro.is_empty());
            assert!(!template.features.is_empty());
            assert!(!template.closing.is_empty());
        }
    }

    #[test]
    fn brand_entry_is_serializable() {
        let json = serde_json::to_string(&BRAND_DATABASE[0]).expect("serialize");
        assert!(json.contains("\"key\":\"nike\""));
        assert!(json.contains("air max"));
    }
}
