//! Carga de configuración del catálogo desde variables de entorno.
//! Usa `FDC_API_KEY` (con `DEMO_KEY` como valor por defecto) y permite
//! sobreescribir la URL base y el timeout.

use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct FdcConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl FdcConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let api_key = env::var("FDC_API_KEY").unwrap_or_else(|_| "DEMO_KEY".into());
        let base_url = env::var("FDC_BASE_URL").unwrap_or_else(|_| "https://api.nal.usda.gov/fdc".into());
        let timeout_secs = env::var("FDC_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(10);
        FdcConfig { api_key, base_url, timeout: Duration::from_secs(timeout_secs) }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
