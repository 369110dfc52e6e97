use super::Output;

pub fn run(out: &Output, expr: &str) -> Result<(), String> {
    let mut generator = out.generator(None, Vec::new())?;
    let roll = generator.roll_dice(expr).map_err(|e| e.to_string())?;
    out.print(&roll)
}
