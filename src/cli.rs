use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "myflix", version, about = "Browse the myFlix movie catalog")]
pub struct Cli {
    /// Override the backend base URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log client activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account (does not log in)
    Register(RegisterArgs),
    /// Log in and remember the session
    Login(LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show who is logged in
    Status,
    /// List movies, optionally filtered by title
    Movies {
        /// Case-insensitive title filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one movie by title
    Movie { title: String },
    /// Show a genre by name
    Genre { name: String },
    /// Show a director by name
    Director { name: String },
    /// List favorite movies
    Favorites,
    /// Change the favorite set
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// View, edit or delete the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub email: String,
    /// Date of birth, e.g. 1990-01-31
    #[arg(long)]
    pub birthday: String,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum FavoriteAction {
    /// Add if absent, remove if present
    Toggle { movie_id: String },
    Add { movie_id: String },
    Remove { movie_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    Show,
    /// Change one or more fields
    Edit(ProfileEditArgs),
    /// Permanently delete the account
    Delete {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct ProfileEditArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub birthday: Option<String>,
}

impl ProfileEditArgs {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.birthday.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_api_url_after_subcommand() {
        let cli = Cli::try_parse_from(["myflix", "movies", "--search", "in", "--api-url", "http://x"])
            .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
        assert!(matches!(cli.command, Command::Movies { search: Some(ref s) } if s == "in"));
    }

    #[test]
    fn favorite_toggle_takes_movie_id() {
        let cli = Cli::try_parse_from(["myflix", "favorite", "toggle", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Favorite {
                action: FavoriteAction::Toggle { ref movie_id }
            } if movie_id == "5"
        ));
    }

    #[test]
    fn login_requires_password() {
        assert!(Cli::try_parse_from(["myflix", "login", "--username", "alice"]).is_err());
    }

    #[test]
    fn empty_profile_edit_detected() {
        let cli = Cli::try_parse_from(["myflix", "profile", "edit"]).unwrap();
        let Command::Profile {
            action: ProfileAction::Edit(args),
        } = cli.command
        else {
            panic!("expected profile edit");
        };
        assert!(args.is_empty());
    }
}
