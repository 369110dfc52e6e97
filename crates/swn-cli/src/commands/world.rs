use swn_tables::Record;

use super::Output;

pub fn run(
    out: &Output,
    culture: Option<&str>,
    secondary: bool,
    exclude: Vec<String>,
) -> Result<(), String> {
    let mut generator = out.generator(culture, exclude)?;
    let world = generator.world(!secondary).map_err(|e| e.to_string())?;

    let mut records: Vec<&dyn Record> = vec![&world];
    records.extend(world.tags.iter().map(|t| t as &dyn Record));
    out.print_all(&records)
}
