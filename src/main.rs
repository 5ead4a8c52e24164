use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use person_registry::RegistryConfig;
use person_registry::api::{HttpPersonApi, PersonApi};
use person_registry::export::{ExportScope, default_file_name};
use person_registry::form::{Field, RegistrationForm, RegistrationView, SubmitOutcome};
use person_registry::listing::{Column, ListingState, ListingView, SortOrder, SortSpec};
use person_registry::models::GovtIdKind;
use person_registry::shell::{Route, render_home};
use person_registry::utils::logging::console::{print_form, print_page};
use person_registry::utils::logging::{create_spinner, finish_and_clear};

#[derive(Parser)]
#[command(name = "person-registry", version, about = "Register and browse individuals")]
struct Cli {
    /// Base URL of the person API (overrides PERSON_REGISTRY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Rows per listing page (overrides PERSON_REGISTRY_PAGE_SIZE)
    #[arg(long, global = true)]
    page_size: Option<usize>,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Show the home screen
    Home,
    /// Submit a registration
    Register(RegisterArgs),
    /// List registered users
    Users(UsersArgs),
    /// Open a screen by its path
    Open { path: String },
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    age: Option<String>,
    /// male, female or other
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    mobile: Option<String>,
    /// AADHAR or PAN
    #[arg(long)]
    id_type: Option<String>,
    #[arg(long)]
    aadhaar: Option<String>,
    #[arg(long)]
    pan: Option<String>,
    /// S/O, D/O, W/O, H/O or C/O
    #[arg(long)]
    guardian_relation: Option<String>,
    #[arg(long)]
    guardian_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    emergency: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long, default_value = "India")]
    country: String,
    #[arg(long)]
    pincode: Option<String>,
    #[arg(long)]
    occupation: Option<String>,
    #[arg(long)]
    religion: Option<String>,
    #[arg(long)]
    marital_status: Option<String>,
    #[arg(long)]
    blood_group: Option<String>,
    #[arg(long, default_value = "India")]
    nationality: String,
}

#[derive(Args, Default)]
struct UsersArgs {
    /// Case-insensitive name search
    #[arg(long)]
    search: Option<String>,
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Column to sort by
    #[arg(long)]
    sort: Option<Column>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,
    /// Write every fetched row to a CSV file, named by timestamp if no path
    /// is given
    #[arg(long, value_name = "PATH")]
    export: Option<Option<PathBuf>>,
    /// Export only the rows matching --search
    #[arg(long, requires = "export")]
    export_filtered: bool,
}

impl RegisterArgs {
    fn into_form(self) -> anyhow::Result<RegistrationForm> {
        let mut form = RegistrationForm::new();
        let text_fields = [
            (Field::Name, self.name),
            (Field::Age, self.age),
            (Field::Gender, self.gender),
            (Field::MobileNumber, self.mobile),
            (Field::GuardianRelation, self.guardian_relation),
            (Field::GuardianName, self.guardian_name),
            (Field::Email, self.email),
            (Field::EmergencyNumber, self.emergency),
            (Field::Address, self.address),
            (Field::Pincode, self.pincode),
            (Field::Occupation, self.occupation),
            (Field::Religion, self.religion),
            (Field::MaritalStatus, self.marital_status),
            (Field::BloodGroup, self.blood_group),
            (Field::Country, Some(self.country)),
            (Field::Nationality, Some(self.nationality)),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                form.set(field, value);
            }
        }

        let kind = self
            .id_type
            .as_deref()
            .map(str::parse::<GovtIdKind>)
            .transpose()
            .context("Invalid --id-type")?;
        form.set_id_kind(kind);
        match kind {
            Some(GovtIdKind::Aadhaar) => {
                form.set(Field::AadhaarNumber, self.aadhaar.unwrap_or_default());
            }
            Some(GovtIdKind::Pan) => {
                form.set(Field::PanNumber, self.pan.unwrap_or_default());
            }
            None if self.aadhaar.is_some() || self.pan.is_some() => {
                warn!("Ignoring ID number without --id-type");
            }
            None => {}
        }

        if let Some(state) = self.state {
            form.select_state(&state);
        }
        if let Some(city) = self.city {
            form.set(Field::City, city);
        }
        Ok(form)
    }
}

async fn register(api: &HttpPersonApi, args: RegisterArgs) -> anyhow::Result<()> {
    let mut view = RegistrationView::new(args.into_form()?);

    let outcome = match view.begin_submit() {
        Ok(person) => {
            let spinner = create_spinner(Some("Submitting registration"));
            let result = api.create_person(&person).await;
            finish_and_clear(&spinner);
            view.finish_submit(&person, result)
        }
        Err(outcome) => outcome,
    };

    if let Some(status) = view.status() {
        println!("{}", status.text());
    }

    match outcome {
        SubmitOutcome::Submitted => Ok(()),
        SubmitOutcome::Rejected(errors) => {
            print_form(&view.form, Some(&errors));
            bail!("registration rejected: {errors}")
        }
        SubmitOutcome::Failed(e) => Err(e).context("registration failed"),
    }
}

async fn users(
    api: &HttpPersonApi,
    config: &RegistryConfig,
    args: UsersArgs,
) -> anyhow::Result<()> {
    let mut view = ListingView::new(config.page_size);

    let spinner = create_spinner(Some("Loading users"));
    let state = view.load(api).await;
    finish_and_clear(&spinner);

    if let ListingState::Failed(message) = state {
        bail!("{message}");
    }
    info!(
        "Loaded {} users, {} per page",
        view.rows().len(),
        view.page_size()
    );

    if let Some(query) = args.search {
        view.set_search(query);
    }
    if let Some(column) = args.sort {
        let order = if args.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        view.set_sort(Some(SortSpec::new(column, order)));
    }

    print_page(&view.page(args.page), view.search());

    if let Some(path) = args.export {
        let path =
            path.unwrap_or_else(|| PathBuf::from(default_file_name(Local::now().naive_local())));
        let scope = if args.export_filtered {
            ExportScope::Filtered
        } else {
            ExportScope::All
        };
        let count = view
            .export_to_path(&path, scope)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        let note = match scope {
            ExportScope::All if !view.search().is_empty() => " (search filter not applied)",
            _ => "",
        };
        println!("Exported {count} rows to {}{note}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = RegistryConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size);
    }
    info!("Using person API at {}", config.api_base_url);

    let api = HttpPersonApi::new(&config).context("Failed to create API client")?;

    match cli.cmd.unwrap_or(Cmd::Home) {
        Cmd::Home => print!("{}", render_home()),
        Cmd::Register(args) => register(&api, args).await?,
        Cmd::Users(args) => users(&api, &config, args).await?,
        Cmd::Open { path } => match path.parse::<Route>()? {
            Route::Home => print!("{}", render_home()),
            Route::Register => {
                print_form(&RegistrationForm::new(), None);
                println!();
                println!("Submit with: person-registry register --name ... --age ... --gender ...");
            }
            Route::Users => users(&api, &config, UsersArgs::default()).await?,
        },
    }

    Ok(())
}
