use super::types::Args;
use sql_middleware::middleware::DatabaseType;

impl Args {
    /// Validate database settings and player names
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database configuration is invalid or the
    /// player names cannot be told apart
    ///
    /// # Panics
    ///
    /// Will panic if the password file is not found
    pub fn validate(&mut self) -> Result<(), String> {
        if self.db_type == DatabaseType::Postgres {
            let secrets_locations = ["/secrets/db_password", "/run/secrets/db_password"];

            if self.db_user.is_none() {
                return Err("Postgres user is required".to_string());
            }
            if self.db_host.is_none() || self.db_host.as_deref().unwrap().is_empty() {
                return Err("Postgres host is required".to_string());
            }
            if self.db_port.is_none() {
                return Err("Postgres port is required".to_string());
            }
            if self.db_password.is_none() {
                return Err("Postgres password is required".to_string());
            } else if secrets_locations.contains(&self.db_password.as_deref().unwrap()) {
                // open the file and read the contents
                let contents = std::fs::read_to_string("/secrets/db_password")
                    .unwrap_or("tempPasswordWillbeReplacedIn!AdminPanel".to_string());
                // set the password to the contents of the file
                self.db_password = Some(contents.trim().to_string());
            }
        }

        // Lifetime tallies re-scan stored winner text for each name, so the
        // names must be non-empty and neither may contain the other.
        let a = self.player_a.trim();
        let b = self.player_b.trim();
        if a.is_empty() || b.is_empty() {
            return Err("Player names must not be empty".to_string());
        }
        if a.contains(b) || b.contains(a) {
            return Err(format!(
                "Player names must be distinguishable; '{a}' and '{b}' overlap"
            ));
        }
        self.player_a = a.to_string();
        self.player_b = b.to_string();

        Ok(())
    }
}
