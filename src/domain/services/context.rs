//! Session context and the collaborator bundle used by the engine.

use std::path::PathBuf;

use crate::domain::ports::{CommandRunner, MenuPresenter, Notifier};
use crate::messages::Messages;

/// Explicit settings passed into the engine instead of global state.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Target of `~` expansion in commands; `None` leaves `~` untouched
    pub home: Option<PathBuf>,
    pub messages: Messages,
    /// Icon attached to notifications
    pub notify_icon: Option<PathBuf>,
}

/// The ports one navigation session talks to.
pub struct Launcher<'a> {
    pub presenter: &'a mut dyn MenuPresenter,
    pub runner: &'a mut dyn CommandRunner,
    pub notifier: &'a mut dyn Notifier,
    pub ctx: &'a SessionContext,
}

impl<'a> Launcher<'a> {
    pub fn new(
        presenter: &'a mut dyn MenuPresenter,
        runner: &'a mut dyn CommandRunner,
        notifier: &'a mut dyn Notifier,
        ctx: &'a SessionContext,
    ) -> Self {
        Self {
            presenter,
            runner,
            notifier,
            ctx,
        }
    }
}
