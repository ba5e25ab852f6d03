use anyhow::Result;
use crux_core::typegen::TypeGen;
use keenetic_wizard_core::{
    events::{FormEvent, UiEvent, WizardEvent},
    failure::Failure,
    types::{LastAction, SchemaVariant, View},
    App, BackendOperation, BackendOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<UiEvent>()?;
    gen.register_type::<FormEvent>()?;
    gen.register_type::<WizardEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<View>()?;
    gen.register_type::<LastAction>()?;
    gen.register_type::<SchemaVariant>()?;
    gen.register_type::<Failure>()?;
    gen.register_type::<BackendOperation>()?;
    gen.register_type::<BackendOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
