//! Error classification
//!
//! Plain `anyhow`/`thiserror` errors are fine for anything that only ends up in
//! the log file. Errors that should be shown to the user carry a [`Context`]:
//! a [`Code`] used to classify them plus an optional message for the status bar.
//!
//! With `anyhow`, attach the context like any other:
//!
//! ```ignore
//! Err(anyhow!("file missing").context(Context::new_static(Code::PullRequests, "No snapshot")))
//! ```
//!
//! `thiserror` types implement [`ErrorWithContext`] instead and are converted
//! with [`into_anyhow`], which keeps the context discoverable via
//! [`AnyhowContextExt::custom_context`].

use std::borrow::Cow;
use strum::{Display, IntoStaticStr};

/// A stable code that consumers may rely on to identify errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Code {
    #[strum(serialize = "errors.validation")]
    Validation,
    #[strum(serialize = "errors.projects")]
    Projects,
    #[strum(serialize = "errors.pull_requests")]
    PullRequests,
}

/// Classification plus user-facing message, attached to lower errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub code: Code,
    pub message: Option<Cow<'static, str>>,
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or("Something went wrong"))
    }
}

impl From<Code> for Context {
    fn from(code: Code) -> Self {
        Context {
            code,
            message: None,
        }
    }
}

impl Context {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Context {
            code,
            message: Some(Cow::Owned(message.into())),
        }
    }

    pub const fn new_static(code: Code, message: &'static str) -> Self {
        Context {
            code,
            message: Some(Cow::Borrowed(message)),
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Recover a [`Context`] (or bare [`Code`]) attached somewhere in an `anyhow` chain.
pub trait AnyhowContextExt: private::Sealed {
    /// Named `custom_context` since `context()` is taken by anyhow.
    fn custom_context(&self) -> Option<Context>;

    /// Message for the user: the attached context if any, the error itself otherwise.
    fn user_message(&self) -> String;
}

impl private::Sealed for anyhow::Error {}
impl AnyhowContextExt for anyhow::Error {
    fn custom_context(&self) -> Option<Context> {
        if let Some(ctx) = self.downcast_ref::<Context>() {
            Some(ctx.clone())
        } else {
            self.downcast_ref::<Code>().map(|code| (*code).into())
        }
    }

    fn user_message(&self) -> String {
        match self.custom_context() {
            Some(ctx) if ctx.message.is_some() => format!("{} [{}]", ctx, ctx.code),
            Some(ctx) => format!("{} [{}]", self.root_cause(), ctx.code),
            None => self.to_string(),
        }
    }
}

/// Implemented by `thiserror` types that know their own [`Context`].
pub trait ErrorWithContext: std::error::Error {
    fn context(&self) -> Option<Context>;
}

/// Convert `err` into `anyhow`, attaching its [`Context`] if it has one.
pub fn into_anyhow(err: impl ErrorWithContext + Send + Sync + 'static) -> anyhow::Error {
    let context = err.context();
    let err = anyhow::Error::from(err);
    if let Some(context) = context {
        err.context(context)
    } else {
        err
    }
}
