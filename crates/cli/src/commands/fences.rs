use anyhow::Result;
use clap::Args;
use console::style;
use domain::default_fences;

#[derive(Debug, Args)]
pub struct FencesCommand {
    /// Print JSON
    #[arg(long)]
    json: bool,
}

impl FencesCommand {
    pub fn execute(self) -> Result<()> {
        let fences = default_fences();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&fences)?);
            return Ok(());
        }

        println!("{}", style("Defined Fences").bold().underlined());
        for fence in &fences {
            println!("  {}", style(&fence.name).cyan().bold());
            println!("    {}", fence.summary_line());
        }
        Ok(())
    }
}
