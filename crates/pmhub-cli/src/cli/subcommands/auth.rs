use std::io::BufRead;

use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Show whether a session is active.
    Status,
    /// Show the signed-in user as reported by the provider.
    Whoami,
    /// End the current session.
    Logout,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password. Also read from PMHUB_PASSWORD.
    #[arg(long, env = "PMHUB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
}

impl AuthLoginArgs {
    /// `--password-stdin` wins over `--password` / `PMHUB_PASSWORD`.
    pub fn resolve_password(&self, mut stdin: impl BufRead) -> anyhow::Result<String> {
        if self.password_stdin {
            let mut line = String::new();
            stdin.read_line(&mut line)?;
            let password = line.trim_end_matches(['\r', '\n']);
            if password.is_empty() {
                anyhow::bail!("auth login: no password on stdin");
            }
            return Ok(password.to_string());
        }
        self.password.clone().ok_or_else(|| {
            anyhow::anyhow!("auth login: pass --password-stdin, set PMHUB_PASSWORD, or use --password")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AuthLoginArgs;

    fn args(password: Option<&str>, password_stdin: bool) -> AuthLoginArgs {
        AuthLoginArgs {
            email: "pm@example.com".into(),
            password: password.map(str::to_string),
            password_stdin,
        }
    }

    #[test]
    fn stdin_password_drops_line_ending_only() {
        let password = args(None, true)
            .resolve_password(" correct horse \r\nignored\n".as_bytes())
            .unwrap();
        assert_eq!(password, " correct horse ");
    }

    #[test]
    fn stdin_takes_precedence_over_flag() {
        let password = args(Some("from-flag"), true)
            .resolve_password("from-stdin\n".as_bytes())
            .unwrap();
        assert_eq!(password, "from-stdin");
    }

    #[test]
    fn empty_stdin_is_an_error() {
        assert!(args(None, true).resolve_password("".as_bytes()).is_err());
    }

    #[test]
    fn flag_value_used_without_stdin() {
        let password = args(Some("pw"), false).resolve_password("".as_bytes()).unwrap();
        assert_eq!(password, "pw");
    }

    #[test]
    fn missing_password_is_an_error() {
        let err = args(None, false).resolve_password("".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("--password-stdin"));
    }
}
