//! Logging de diagnóstico.
//!
//! Los crates del workspace registran con el facade `log`; aquí se instala un
//! subscriber de `tracing` que los recibe (puente `tracing-log`) y escribe en
//! stderr. El nivel por defecto es `warn`, de modo que una ejecución normal no
//! imprime nada; `SVNHOOK_LOG=debug` muestra cada invocación de svnlook.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SVNHOOK_LOG";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Si ya hay un subscriber global (tests) se conserva.
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .with_target(false)
                                     .try_init();
}
