//! Ejecuta un proceso externo y captura stdout/stderr.
//!
//! Ambos streams se drenan en paralelo (un hilo por stream) mientras el
//! proceso corre: si sólo se leyera uno, el otro podría llenar su pipe y
//! bloquear al hijo. Los dos hilos se unen antes de esperar al proceso y de
//! construir el resultado.

use std::ffi::OsStr;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

use crate::errors::HookError;

/// Resultado de una invocación terminada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Código de salida; `-1` si el proceso terminó por señal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Texto relevante: stdout si terminó bien, stderr en otro caso.
    pub fn message(&self) -> &str {
        if self.success() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Lanza `program` con `args`, drena ambos streams concurrentemente y espera
/// su finalización.
///
/// Errores:
/// - `HookError::Spawn` si el proceso no pudo lanzarse, si falla la lectura
///   de alguno de los streams o la espera final.
pub fn run_command<S>(program: impl AsRef<OsStr>, args: &[S]) -> Result<CommandOutput, HookError>
    where S: AsRef<OsStr>
{
    let program = program.as_ref();
    let command_line = render_command_line(program, args);
    debug!("run_command:start cmd={command_line}");

    let spawn_error = |source: io::Error| HookError::Spawn { command: command_line.clone(),
                                                             source };

    let mut child = Command::new(program).args(args)
                                         .stdin(Stdio::null())
                                         .stdout(Stdio::piped())
                                         .stderr(Stdio::piped())
                                         .spawn()
                                         .map_err(spawn_error)?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (stdout, stderr) = thread::scope(|scope| {
        let out = scope.spawn(move || drain(stdout));
        let err = scope.spawn(move || drain(stderr));
        (join_drain(out), join_drain(err))
    });

    // Siempre se espera al hijo, incluso si el drenado falló, para no dejar
    // procesos zombie.
    let status = child.wait().map_err(spawn_error)?;
    let stdout = stdout.map_err(spawn_error)?;
    let stderr = stderr.map_err(spawn_error)?;

    let output = CommandOutput { exit_code: status.code().unwrap_or(-1),
                                 stdout,
                                 stderr };
    debug!("run_command:done cmd={command_line} exit={} stdout_len={} stderr_len={}",
           output.exit_code,
           output.stdout.len(),
           output.stderr.len());
    Ok(output)
}

/// Lee un stream completo y lo normaliza: líneas unidas con `\n`, sin
/// espacios al inicio ni al final.
fn drain<R: Read>(stream: Option<R>) -> io::Result<String> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf)?;
    }
    let text = String::from_utf8_lossy(&buf);
    Ok(text.lines().collect::<Vec<_>>().join("\n").trim().to_string())
}

fn join_drain(handle: thread::ScopedJoinHandle<'_, io::Result<String>>) -> io::Result<String> {
    handle.join()
          .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stream drain thread panicked")))
}

pub(crate) fn render_command_line<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> String {
    let mut line = program.to_string_lossy().into_owned();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}
