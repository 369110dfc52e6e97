use super::Output;

pub fn run(out: &Output) -> Result<(), String> {
    let mut generator = out.generator(None, Vec::new())?;
    let religion = generator.religion().map_err(|e| e.to_string())?;
    out.print(&religion)
}
