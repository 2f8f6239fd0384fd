// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use snafu::{ResultExt, Whatever, whatever};
use strum::IntoEnumIterator;
use themesmith_app::{App, AppConfig};
use themesmith_common_telemetry as telemetry;
use themesmith_export::{Dialect, ExportFormat};
use themesmith_store::Persisted;
use themesmith_theme::{PaletteMode, presets::Preset};

mod build_info;

#[derive(Debug, Parser)]
#[clap(
name = "themesmith",
about = "Edit, persist and export Material UI theme configurations",
author = build_info::AUTHOR,
version = build_info::FULL_VERSION,
long_version = build_info::LONG_VERSION)]
struct Cli {
    /// Settings file (TOML). Defaults to settings.toml in the config
    /// directory when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for all user data, including stored themes and logs.
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Show(ShowArgs),
    Set(SetArgs),
    Preset(PresetArgs),
    Mode(ModeArgs),
    Reset(ResetArgs),
    Theme(ThemeArgs),
    Export(ExportArgs),
    Import(ImportArgs),
    Usage(UsageArgs),
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Print the current theme configuration as JSON.
Examples:

themesmith show

")]
struct ShowArgs {}

impl ShowArgs {
    fn run(&self, app: &App) -> Result<(), Whatever> {
        let json = app
            .config_json()
            .whatever_context("Failed to render configuration")?;
        println!("{json}");
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r##"

Merge a partial theme configuration into the current one.
Nested palette, typography, shape and customShadow objects are merged one
level deep; everything else is replaced.
Examples:

themesmith set '{"palette": {"primary": {"main": "#ff5722"}}}'
themesmith set --file patch.json

"##)]
struct SetArgs {
    /// Partial configuration as JSON text.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    json: Option<String>,

    /// Read the partial configuration from a file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl SetArgs {
    fn run(&self, app: &mut App) -> Result<(), Whatever> {
        let persisted = match (&self.json, &self.file) {
            (_, Some(path)) => app.apply_file(path),
            (Some(json), None) => app.apply_json(json),
            (None, None) => whatever!("Nothing to apply"),
        }
        .whatever_context("Failed to apply update")?;
        check_persisted(persisted)
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r#"

Merge one of the bundled presets into the current configuration.
Keys the preset does not set, such as the button style, are kept.
Examples:

themesmith preset --list
themesmith preset ocean-blue
themesmith preset "Purple Dream"

"#)]
struct PresetArgs {
    /// Preset name or slug.
    #[arg(required_unless_present = "list", value_parser = parse_preset)]
    name: Option<Preset>,

    /// List the available presets.
    #[arg(long, conflicts_with = "name")]
    list: bool,
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::find(name).ok_or_else(|| {
        let known: Vec<&str> = Preset::iter().map(Preset::slug).collect();
        format!("unknown preset, expected one of: {}", known.join(", "))
    })
}

impl PresetArgs {
    fn run(&self, app: &mut App) -> Result<(), Whatever> {
        match (self.list, self.name) {
            (true, _) => {
                for preset in Preset::iter() {
                    println!("{:<18}{preset}", preset.slug());
                }
                Ok(())
            }
            (false, Some(preset)) => check_persisted(app.apply_preset(preset)),
            (false, None) => whatever!("No preset given"),
        }
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Switch the palette between light and dark.
Background and text colors are replaced with the pair that suits the mode;
every other palette color is kept.
Examples:

themesmith mode dark

")]
struct ModeArgs {
    /// light or dark.
    mode: PaletteMode,
}

impl ModeArgs {
    fn run(&self, app: &mut App) -> Result<(), Whatever> {
        check_persisted(app.set_mode(self.mode))
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Restore the built-in theme configuration and clear the stored copy.
Examples:

themesmith reset

")]
struct ResetArgs {}

impl ResetArgs {
    fn run(&self, app: &mut App) -> Result<(), Whatever> { check_persisted(app.reset()) }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Print the render theme derived from the current configuration as JSON.
Examples:

themesmith theme

")]
struct ThemeArgs {}

impl ThemeArgs {
    fn run(&self, app: &App) -> Result<(), Whatever> {
        let json = app
            .theme_json()
            .whatever_context("Failed to render theme")?;
        println!("{json}");
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Export the current configuration as JSON or as a TypeScript/JavaScript
theme module.
Examples:

themesmith export --format ts
themesmith export --format json --out ./theme-config.json

")]
struct ExportArgs {
    /// json, ts or js.
    #[arg(long, default_value = "json")]
    format: ExportFormat,

    /// Write to this file, or to the format's default name inside this
    /// directory, instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

impl ExportArgs {
    fn run(&self, app: &App) -> Result<(), Whatever> {
        if let Some(out) = &self.out {
            let path = app
                .export_to(self.format, out)
                .whatever_context("Failed to export")?;
            eprintln!("Wrote {}", path.display());
        } else {
            let text = app.export(self.format).whatever_context("Failed to export")?;
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Adopt a theme configuration from a JSON file.
The current configuration is left untouched if the file cannot be parsed.
Examples:

themesmith import ./theme-config.json

")]
struct ImportArgs {
    /// JSON file to import.
    path: PathBuf,
}

impl ImportArgs {
    fn run(&self, app: &mut App) -> Result<(), Whatever> {
        let persisted = app
            .import_file(&self.path)
            .whatever_context("Import failed")?;
        check_persisted(persisted)
    }
}

#[derive(Debug, Clone, Args)]
#[command(flatten_help = true)]
#[command(long_about = r"

Print an example of mounting the exported theme in an application.
Examples:

themesmith usage --dialect js

")]
struct UsageArgs {
    /// ts or js.
    #[arg(long, default_value = "ts")]
    dialect: Dialect,
}

impl UsageArgs {
    fn run(&self) {
        print!("{}", App::usage(self.dialect));
    }
}

/// A change that could not be stored is lost when the process exits.
fn check_persisted(persisted: Persisted) -> Result<(), Whatever> {
    match persisted {
        Persisted::Saved | Persisted::Cleared => Ok(()),
        Persisted::Failed(e) => Err(e).whatever_context("Failed to save theme configuration"),
    }
}

fn main() -> Result<(), Whatever> {
    human_panic::setup_panic!();
    let cli = Cli::parse();

    if let Commands::Usage(args) = &cli.commands {
        args.run();
        return Ok(());
    }

    if let Some(dir) = &cli.data_dir {
        themesmith_paths::set_custom_data_dir(dir)
            .with_whatever_context(|_| format!("Invalid data directory {}", dir.display()))?;
    }

    let config =
        AppConfig::load(cli.config.as_deref()).whatever_context("Failed to load settings")?;
    let _guards = telemetry::init_global_logging("themesmith", &config.logging);
    telemetry::set_panic_hook();
    tracing::debug!(version = build_info::FULL_VERSION, "starting themesmith");

    let mut app = config.open();
    match &cli.commands {
        Commands::Show(args) => args.run(&app),
        Commands::Set(args) => args.run(&mut app),
        Commands::Preset(args) => args.run(&mut app),
        Commands::Mode(args) => args.run(&mut app),
        Commands::Reset(args) => args.run(&mut app),
        Commands::Theme(args) => args.run(&app),
        Commands::Export(args) => args.run(&app),
        Commands::Import(args) => args.run(&mut app),
        Commands::Usage(args) => {
            args.run();
            Ok(())
        }
    }
}
