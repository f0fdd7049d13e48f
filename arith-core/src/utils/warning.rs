use std::{path::PathBuf, sync::{atomic::{AtomicUsize, Ordering}, Arc, RwLock}};

use termcolor::Buffer;

use crate::lexer::prelude::{LexicalError, LexicalErrorType};
use super::diagnostic::{Diagnostic, Label, Level, Location};

/// Receiver of non-fatal diagnostics. The tokenizer reports skipped
/// characters here instead of stopping the scan.
pub trait WarningEmitterIO: Send + Sync {
    fn emit_warning(&self, warning: Warning);
}

#[derive(Debug, Clone, Copy)]
pub struct NullWarningEmitterIO;

impl WarningEmitterIO for NullWarningEmitterIO {
    fn emit_warning(&self, _warning: Warning) {}
}

/// Forwards every warning to the `log` facade at `warn` level.
#[derive(Debug, Clone, Copy)]
pub struct LogWarningEmitterIO;

impl WarningEmitterIO for LogWarningEmitterIO {
    fn emit_warning(&self, warning: Warning) {
        log::warn!("{warning}");
    }
}

#[derive(Debug, Default, Clone)]
pub struct VectorWarningEmitterIO {
    pub warnings: Arc<RwLock<Vec<Warning>>>
}

impl VectorWarningEmitterIO {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Warning> {
        let mut warnings = self.write_lock();
        std::mem::take(&mut *warnings)
    }

    pub fn reset(&self) {
        let mut warnings = self.write_lock();
        warnings.clear();
    }

    pub fn pop(&self) -> Option<Warning> {
        let mut warnings = self.write_lock();
        warnings.pop()
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Warning>> {
        self.warnings.write().expect("Vector lock poisoned")
    }
}

impl WarningEmitterIO for VectorWarningEmitterIO {
    fn emit_warning(&self, warning: Warning) {
        let mut warnings = self.write_lock();

        warnings.push(warning);
    }
}

#[derive(Clone)]
pub struct WarningEmitter {
    count: Arc<AtomicUsize>,
    emitter: Arc<dyn WarningEmitterIO>
}

impl WarningEmitter {
    pub fn new(emitter: Arc<dyn WarningEmitterIO>) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            emitter,
        }
    }

    pub fn null() -> Self {
        Self::new(Arc::new(NullWarningEmitterIO))
    }

    pub fn log() -> Self {
        Self::new(Arc::new(LogWarningEmitterIO))
    }

    pub fn reset_count(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn emit(&self, warning: Warning) {
        _ = self.count.fetch_add(1, Ordering::Relaxed);
        self.emitter.emit_warning(warning);
    }
}

/// Binds a [`WarningEmitter`] to the source being scanned so the lexer only
/// has to hand over the error itself.
pub struct LexWarningEmitter {
    module_path: PathBuf,
    module_src: String,
    emitter: WarningEmitter,
}

impl LexWarningEmitter {
    pub fn new(
        module_path: PathBuf,
        module_src: String,
        emitter: WarningEmitter
    ) -> Self {
        Self {
            module_path,
            module_src,
            emitter,
        }
    }

    pub fn emit(&self, error: LexicalError) {
        self.emitter.emit(Warning::Lexical {
            path: self.module_path.clone(),
            src: self.module_src.clone(),
            error,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    Lexical {
        path: PathBuf,
        src: String,
        error: LexicalError
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::Lexical { error, .. } => write!(f, "{error}"),
        }
    }
}

impl Warning {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        self.to_diagnostic().write(buf);
        buf.write_all(b"\n")
            .expect("error pretty buffer write space after");
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Warning::Lexical { path, src, error } => match error.error {
                LexicalErrorType::UnrecognizedCharacter { .. } => {
                    let (label, _) = error.details();

                    Diagnostic {
                        title: "Unrecognized character".into(),
                        text: error.to_string(),
                        hint: Some("The character was skipped.".into()),
                        level: Level::Warning,
                        location: Some(Location {
                            src,
                            path: path.clone(),
                            label: Label {
                                text: Some(label.to_string()),
                                span: error.location,
                            },
                        }),
                    }
                }
            }
        }
    }
}
