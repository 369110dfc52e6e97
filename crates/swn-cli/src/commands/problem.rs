use super::Output;

pub fn run(out: &Output) -> Result<(), String> {
    let mut generator = out.generator(None, Vec::new())?;
    let problem = generator.problem().map_err(|e| e.to_string())?;
    out.print(&problem)
}
