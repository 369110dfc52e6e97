use super::Output;

pub fn run(out: &Output, culture: Option<&str>) -> Result<(), String> {
    let mut generator = out.generator(culture, Vec::new())?;
    out.print(&generator.name())
}
