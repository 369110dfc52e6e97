use super::Output;

pub fn run(out: &Output) -> Result<(), String> {
    let mut generator = out.generator(None, Vec::new())?;
    out.print(&generator.culture())
}
