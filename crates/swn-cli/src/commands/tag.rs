use super::Output;
use crate::format::OutputMode;

pub fn run(out: &Output, name: Option<&str>) -> Result<(), String> {
    let mut generator = out.generator(None, Vec::new())?;
    let tag = generator.tag(name).map_err(|e| e.to_string())?;
    out.print(&tag)
}

pub fn list(out: &Output) -> Result<(), String> {
    let generator = out.generator(None, Vec::new())?;
    let names = generator.tag_names();
    if out.mode == OutputMode::Json {
        let json = serde_json::to_string_pretty(&names).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        for name in &names {
            println!("{name}");
        }
    }
    Ok(())
}
