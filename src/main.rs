mod cli;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use myflix::api::ApiClient;
use myflix::config::{Config, ConfigStore};
use myflix::logging::init_tracing;
use myflix::search::SearchBroadcaster;
use myflix::session::{FilePersistence, SessionStore};
use myflix::ui::auth::{LoginFormIntent, RegistrationField};
use myflix::ui::profile::ProfileField;
use myflix::ui::{App, Notice};
use myflix::AppError;

use crate::cli::{Cli, Command, FavoriteAction, ProfileAction, ProfileEditArgs};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(config_path)?;
    if let Some(url) = cli.api_url.clone() {
        store
            .update(|config| config.api.base_url = url)
            .context("invalid --api-url")?;
    }
    let config = store.get();

    let persistence = Arc::new(FilePersistence::new(config.session_path()));
    let session_file = persistence.path().to_path_buf();
    let session = SessionStore::open(persistence)?;
    let api = ApiClient::new(&config.api, session)?;
    let mut app = App::new(api, SearchBroadcaster::new());
    tracing::debug!(base_url = %app.api().base_url(), route = ?app.route(), "started");

    match cli.command {
        Command::Register(args) => {
            app.set_registration_field(RegistrationField::Username, args.username);
            app.set_registration_field(RegistrationField::Password, args.password);
            app.set_registration_field(RegistrationField::Email, args.email);
            app.set_registration_field(RegistrationField::Birthday, args.birthday);
            let result = app.register().await;
            report(result, app.registration_form().notice.as_ref())
        }
        Command::Login(args) => {
            app.dispatch_login(LoginFormIntent::SetUsername(args.username));
            app.dispatch_login(LoginFormIntent::SetPassword(args.password));
            let result = app.login().await;
            report(result, app.login_form().notice.as_ref())
        }
        Command::Logout => {
            app.logout()?;
            println!("Logged out.");
            Ok(())
        }
        Command::Status => {
            let session = app.session().snapshot();
            match (session.username, session.user_id) {
                (Some(username), Some(user_id)) if session.token.is_some() => {
                    println!("Logged in as {} ({})", username, user_id);
                }
                _ => println!("Not logged in."),
            }
            println!("Config: {}", store.path().display());
            println!("Session file: {}", session_file.display());
            Ok(())
        }
        Command::Movies { search } => {
            if let Some(term) = search {
                app.set_search(term);
            }
            let result = app.open_movies().await;
            report(result, app.movies().notice.as_ref())?;
            print!("{}", render::movie_grid(app.movies()));
            Ok(())
        }
        Command::Movie { title } => {
            let result = app.show_movie(&title).await;
            report(result, None)?;
            print!("{}", render::dialog(app.dialog()));
            Ok(())
        }
        Command::Genre { name } => {
            let result = app.show_genre(&name).await;
            report(result, None)?;
            print!("{}", render::dialog(app.dialog()));
            Ok(())
        }
        Command::Director { name } => {
            let result = app.show_director(&name).await;
            report(result, None)?;
            print!("{}", render::dialog(app.dialog()));
            Ok(())
        }
        Command::Favorites => {
            let result = app.open_favorites().await;
            report(result, app.favorites().notice.as_ref())?;
            print!("{}", render::favorites(app.favorites()));
            Ok(())
        }
        Command::Favorite { action } => favorite(&mut app, action).await,
        Command::Profile { action } => profile(&mut app, action).await,
    }
}

async fn favorite(app: &mut App, action: FavoriteAction) -> anyhow::Result<()> {
    let (movie_id, wanted) = match action {
        FavoriteAction::Toggle { movie_id } => (movie_id, None),
        FavoriteAction::Add { movie_id } => (movie_id, Some(true)),
        FavoriteAction::Remove { movie_id } => (movie_id, Some(false)),
    };

    // The grid's favorite set decides whether a toggle adds or removes.
    let loaded = app.open_movies().await;
    report(loaded, app.movies().notice.as_ref())?;

    let current = app.movies().is_favorite(&movie_id);
    if wanted == Some(current) {
        println!(
            "{} is already {}.",
            movie_id,
            if current { "a favorite" } else { "not a favorite" }
        );
        return Ok(());
    }

    let result = app.toggle_favorite(&movie_id).await;
    report(result, app.movies().notice.as_ref())
}

async fn profile(app: &mut App, action: ProfileAction) -> anyhow::Result<()> {
    match action {
        ProfileAction::Show => {
            let result = app.open_profile().await;
            report(result, app.profile().notice.as_ref())?;
            print!("{}", render::profile(app.profile()));
            Ok(())
        }
        ProfileAction::Edit(args) => {
            if args.is_empty() {
                bail!("Nothing to change; pass at least one of --username, --password, --email, --birthday");
            }
            let result = app.open_profile().await;
            report(result, app.profile().notice.as_ref())?;

            app.begin_edit();
            apply_edits(app, args);
            let result = app.save_profile().await;
            report(result, app.profile().notice.as_ref())?;
            print!("{}", render::profile(app.profile()));
            Ok(())
        }
        ProfileAction::Delete { yes } => {
            if !yes {
                bail!("Refusing to delete the account without --yes");
            }
            let result = app.delete_profile().await;
            report(result, app.profile().notice.as_ref())
        }
    }
}

fn apply_edits(app: &mut App, args: ProfileEditArgs) {
    let edits = [
        (ProfileField::Username, args.username),
        (ProfileField::Password, args.password),
        (ProfileField::Email, args.email),
        (ProfileField::Birthday, args.birthday),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            app.edit_field(field, value);
        }
    }
}

/// Print the notice an action left behind and turn a failure into an error
/// carrying the text the user should see.
fn report(result: Result<(), AppError>, notice: Option<&Notice>) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            if let Some(notice) = notice {
                println!("{}", notice);
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = ?e, "action failed");
            match notice {
                Some(notice) if notice.is_failure() => bail!("{}", notice),
                _ => bail!("{}", failure_text(&e)),
            }
        }
    }
}

fn failure_text(error: &AppError) -> String {
    match error {
        AppError::Api(e) => e.user_message().to_string(),
        AppError::NotAuthenticated => "Not logged in; run `myflix login` first.".to_string(),
        other => other.to_string(),
    }
}
