//! # Lamina CLI Application
//!
//! Command line front end for the composite laminate backend. Shares the
//! form, gateway and chart code with the GUI, so a layup typed here is
//! validated and sent exactly as the window would send it.
//!
//! ```text
//! lamina_cli presets
//! lamina_cli preview --material glass --stack "0, 90, 45" --symmetric
//! lamina_cli calculate --e1 150e9 --json
//! lamina_cli polar --component gxy --svg polar.svg
//! lamina_cli envelope --url http://backend:8000 --svg envelope.svg
//! ```

mod output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, error, info};

use lamina_core::client::HttpClient;
use lamina_core::config::Settings;
use lamina_core::errors::{LaminaError, LaminaResult};
use lamina_core::feedback::Action;
use lamina_core::form::{Field, LaminateForm};
use lamina_core::gateway::Gateway;
use lamina_core::laminate::ModulusComponent;
use lamina_core::logging;
use lamina_core::materials::MaterialLibrary;
use lamina_core::stack::StackPreview;

use output::TerminalSink;

#[derive(Parser, Debug)]
#[command(name = "lamina_cli")]
#[command(version, about = "Composite laminate calculator client")]
struct Cli {
    /// Backend base URL (overrides settings and LAMINA_API_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Path to a lamina.toml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the materials library
    Presets,
    /// Show field previews and the layup summary without contacting the backend
    Preview(FormArgs),
    /// Engineering constants and ABD matrix
    Calculate {
        #[command(flatten)]
        form: FormArgs,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Stiffness polar sweep
    Polar {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long)]
        json: bool,
        /// Write the polar plot to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Modulus drawn in the SVG
        #[arg(long, value_enum, default_value_t = ComponentArg::Ex)]
        component: ComponentArg,
    },
    /// First-ply failure envelope
    Envelope {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long)]
        json: bool,
        /// Write the envelope plot to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentArg {
    Ex,
    Ey,
    Gxy,
}

impl From<ComponentArg> for ModulusComponent {
    fn from(arg: ComponentArg) -> Self {
        match arg {
            ComponentArg::Ex => ModulusComponent::Ex,
            ComponentArg::Ey => ModulusComponent::Ey,
            ComponentArg::Gxy => ModulusComponent::Gxy,
        }
    }
}

/// Form fields; anything not given keeps the preset's value.
#[derive(Args, Debug, Clone, Default)]
struct FormArgs {
    /// Materials library key to start from
    #[arg(short, long, default_value = "carbon")]
    material: String,
    #[arg(long, allow_hyphen_values = true)]
    e1: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    e2: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    g12: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    v12: Option<String>,
    /// Ply angles in degrees, comma separated (e.g. "0, 45, -45, 90")
    #[arg(long, allow_hyphen_values = true)]
    stack: Option<String>,
    /// Mirror the layup
    #[arg(long, conflicts_with = "no_symmetric")]
    symmetric: bool,
    #[arg(long)]
    no_symmetric: bool,
    /// Ply thickness in meters
    #[arg(long, allow_hyphen_values = true)]
    thickness: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    xt: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    xc: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    yt: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    yc: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    s: Option<String>,
}

impl FormArgs {
    fn overrides(&self) -> [(Field, &Option<String>); 11] {
        [
            (Field::E1, &self.e1),
            (Field::E2, &self.e2),
            (Field::G12, &self.g12),
            (Field::V12, &self.v12),
            (Field::Stack, &self.stack),
            (Field::Thickness, &self.thickness),
            (Field::Xt, &self.xt),
            (Field::Xc, &self.xc),
            (Field::Yt, &self.yt),
            (Field::Yc, &self.yc),
            (Field::S, &self.s),
        ]
    }

    /// Start from the preset, then apply every flag that was given
    fn build(&self, library: &MaterialLibrary) -> LaminaResult<LaminateForm> {
        let mut form = LaminateForm::from_preset(library.get(&self.material)?);

        for (field, value) in self.overrides() {
            if let Some(value) = value {
                form.edit(field, value.as_str());
            }
        }

        if self.symmetric {
            form.set_symmetric(true);
        } else if self.no_symmetric {
            form.set_symmetric(false);
        }

        debug!("Form built from '{}' ({})", self.material, form.selection_label());
        Ok(form)
    }
}

/// Process exit code for a failed command
fn exit_code(error: &LaminaError) -> i32 {
    match error {
        LaminaError::InvalidAngle { .. }
        | LaminaError::EmptyStack
        | LaminaError::MaterialNotFound { .. } => 2,
        LaminaError::Config { .. } => 3,
        LaminaError::Network { .. } => 4,
        LaminaError::Backend { .. } | LaminaError::Decode { .. } => 5,
        LaminaError::Clipboard { .. } | LaminaError::Internal { .. } => 1,
    }
}

fn presets_text(library: &MaterialLibrary) -> String {
    library
        .presets()
        .iter()
        .map(|preset| {
            let form = LaminateForm::from_preset(preset);
            let layup = match form.stack_preview() {
                StackPreview::Valid(summary) => summary.describe(),
                StackPreview::Invalid { message } => message,
            };
            format!("{:<10} {:<14} {}", preset.key, preset.display_name(), layup)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn preview_text(form: &LaminateForm) -> String {
    let mut lines = vec![format!("Material: {}", form.selection_label())];

    for field in Field::ALL {
        if field == Field::Stack {
            continue;
        }
        let preview = form.preview(field);
        let value = form.value(field);
        if preview.is_empty() {
            lines.push(format!("  {:<18} {}", field.label(), value));
        } else {
            lines.push(format!("  {:<18} {} ({})", field.label(), value, preview));
        }
    }

    match form.stack_preview() {
        StackPreview::Valid(summary) => {
            lines.push(format!("Layup: {}", summary.badges().join(" ")));
            lines.push(format!("  {}", summary.describe()));
        }
        StackPreview::Invalid { message } => lines.push(format!("Layup: invalid ({})", message)),
    }

    lines.join("\n")
}

fn write_svg(path: &Path, svg: Option<String>) -> LaminaResult<()> {
    let svg = svg.ok_or_else(|| LaminaError::internal("no chart to write"))?;
    std::fs::write(path, svg)
        .map_err(|e| LaminaError::internal(format!("writing {}: {}", path.display(), e)))?;
    info!("Chart written to {}", path.display());
    Ok(())
}

async fn run_action(
    settings: &Settings,
    action: Action,
    form: &LaminateForm,
    mut sink: TerminalSink,
    svg: Option<PathBuf>,
) -> LaminaResult<()> {
    let client = HttpClient::from_settings(&settings.api)?;
    let gateway = Gateway::new(Arc::new(client));

    let result = gateway.run(action, form).await?;
    result.deliver(&mut sink);

    println!("{}", sink.output?);
    if let Some(path) = svg {
        write_svg(&path, sink.svg)?;
    }
    Ok(())
}

async fn run(cli: Cli) -> LaminaResult<()> {
    let settings = Settings::load(cli.config.as_deref())?.with_base_url(cli.url.clone());
    let library = settings.library();
    debug!("Backend at {}", settings.api.base_url);

    match cli.command {
        Command::Presets => {
            println!("{}", presets_text(&library));
            Ok(())
        }
        Command::Preview(form) => {
            println!("{}", preview_text(&form.build(&library)?));
            Ok(())
        }
        Command::Calculate { form, json } => {
            let form = form.build(&library)?;
            let sink = TerminalSink::new(json, settings.ui.polar_component);
            run_action(&settings, Action::Calculate, &form, sink, None).await
        }
        Command::Polar {
            form,
            json,
            svg,
            component,
        } => {
            let form = form.build(&library)?;
            let sink = TerminalSink::new(json, component.into());
            run_action(&settings, Action::Polar, &form, sink, svg).await
        }
        Command::Envelope { form, json, svg } => {
            let form = form.build(&library)?;
            let sink = TerminalSink::new(json, settings.ui.polar_component);
            run_action(&settings, Action::Envelope, &form, sink, svg).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{} ({})", e, e.error_code());
        eprintln!("Error: {}", e.user_message());
        std::process::exit(exit_code(&e));
    }
}
