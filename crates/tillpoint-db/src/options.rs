use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use tillpoint_config::DatabaseConfig;
use tracing::warn;

use crate::error::DbError;

/// Driver options for the configured database.
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, DbError> {
    parse_with_tls(&config.connection_url(), config)
}

/// Driver options for the server without a database selected.
pub fn server_connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, DbError> {
    parse_with_tls(&config.server_url(), config)
}

fn parse_with_tls(url: &str, config: &DatabaseConfig) -> Result<MySqlConnectOptions, DbError> {
    let options = MySqlConnectOptions::from_str(url).map_err(DbError::Configuration)?;

    match ssl_mode(config) {
        MySqlSslMode::VerifyCa => Ok(options
            .ssl_mode(MySqlSslMode::VerifyCa)
            .ssl_ca(&config.ssl_ca)),
        mode => {
            warn!(
                ssl_ca = %config.ssl_ca.display(),
                "CA certificate not found, server certificate will not be verified"
            );
            Ok(options.ssl_mode(mode))
        }
    }
}

/// TLS is never optional. Without the CA file the server certificate goes
/// unverified, but the connection is still encrypted.
fn ssl_mode(config: &DatabaseConfig) -> MySqlSslMode {
    if config.ssl_ca.is_file() {
        MySqlSslMode::VerifyCa
    } else {
        MySqlSslMode::Required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(password: &str) -> DatabaseConfig {
        DatabaseConfig {
            host: "db.internal".to_string(),
            port: 3306,
            name: "pos".to_string(),
            user: "cashier".to_string(),
            password: password.to_string(),
            ssl_ca: PathBuf::from("does/not/exist.pem"),
        }
    }

    #[test]
    fn test_encoded_password_round_trips_through_driver() {
        let options = connect_options(&config("p@ss/word:#1")).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_username(), "cashier");
        assert_eq!(options.get_database(), Some("pos"));
    }

    #[test]
    fn test_encoded_user_round_trips_through_driver() {
        let mut config = config("secret");
        config.user = "pos:admin/1".to_string();
        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_username(), "pos:admin/1");
    }

    #[test]
    fn test_missing_ca_still_requires_tls() {
        assert!(matches!(ssl_mode(&config("secret")), MySqlSslMode::Required));
    }

    #[test]
    fn test_present_ca_verifies_server() {
        let ca = std::env::temp_dir().join(format!("tillpoint-db-ca-{}.pem", std::process::id()));
        std::fs::write(&ca, "-----BEGIN CERTIFICATE-----\n").unwrap();

        let mut config = config("secret");
        config.ssl_ca = ca.clone();
        assert!(matches!(ssl_mode(&config), MySqlSslMode::VerifyCa));

        std::fs::remove_file(&ca).ok();
    }

    #[test]
    fn test_server_options_select_no_database() {
        let options = server_connect_options(&config("secret")).unwrap();
        assert_eq!(options.get_database(), None);
    }
}
