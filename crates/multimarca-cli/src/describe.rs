use clap::Args;
use multimarca_descgen::{DescriptionEngine, GenerationRequest};

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Product name, e.g. "Nike Air Max 270".
    #[arg(long)]
    pub name: String,
    /// Product category, e.g. "Zapatillas".
    #[arg(long)]
    pub category: String,
    /// Subcategory used in the generic body when no brand is detected.
    #[arg(long, default_value = "")]
    pub subcategory: String,
    /// Print the full JSON result instead of plain text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DescribeArgs) -> anyhow::Result<()> {
    let engine = DescriptionEngine::builtin();
    let request = GenerationRequest {
        name: args.name.clone(),
        category: args.category.clone(),
        subcategory: args.subcategory.clone(),
    };
    let generated = engine.generate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        match generated.detected_brand {
            Some(brand) => println!("marca detectada: {brand}\n"),
            None => println!("sin marca detectada\n"),
        }
        println!("{}", generated.description);
    }
    Ok(())
}
