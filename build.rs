use clap::CommandFactory;
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::PathBuf;

#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::Cli;

fn generate_completions(outdir: &std::ffi::OsString) -> Result<()> {
    let mut cmd = Cli::command();

    for shell in [Shell::Bash, Shell::Fish, Shell::Zsh, Shell::PowerShell] {
        generate_to(shell, &mut cmd, "fancylists", outdir)?;
    }

    Ok(())
}

fn generate_man_pages() -> Result<()> {
    let out_dir = PathBuf::from("target/man");
    fs::create_dir_all(&out_dir)?;

    let cmd = Cli::command();

    let man = Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("fancylists.1"), buffer)?;

    // One page per subcommand, like git and cargo
    for subcommand in cmd.get_subcommands() {
        let subcommand_name = subcommand.get_name();
        if subcommand_name == "help" {
            continue;
        }

        let name = format!("fancylists-{}", subcommand_name);
        let man = Man::new(subcommand.clone()).title(&name);
        let mut buffer = Vec::new();
        man.render(&mut buffer)?;
        fs::write(out_dir.join(format!("{}.1", name)), buffer)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    if let Some(outdir) = env::var_os("OUT_DIR") {
        generate_completions(&outdir)?;
    }

    generate_man_pages()?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
