use super::Output;

pub fn run(out: &Output, culture: Option<&str>) -> Result<(), String> {
    let mut generator = out.generator(culture, Vec::new())?;
    let npc = generator.npc().map_err(|e| e.to_string())?;
    out.print(&npc)
}
