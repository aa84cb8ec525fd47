//! Command routing
//!
//! Bridges the host's command system to the engine's executor:
//!
//! 1. The host hands over the raw line (`spark profiler start` or
//!    `/spark profiler start`)
//! 2. The line is tokenized and the keyword stripped
//! 3. The remaining arguments go to the engine along with a sender built
//!    for the invoking source
//!
//! Lines addressed to some other command are declined, not rejected: the
//! host is free to treat them as unrelated input. So are lines that arrive
//! while no engine is enabled.

use std::sync::Arc;

use spark_shared::{CommandHandler, CommandSource, SuggestionBuilder};

use crate::engine::EngineSlot;
use crate::sender::SenderFactory;

mod args;


pub use args::{Invocation, InvocationMode, arguments, tokenize};

/// Outcome of routing one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult {
    /// Not addressed to this command, or no engine is enabled; nothing was
    /// dispatched
    NotHandled,
    /// Arguments were handed to the engine's executor
    Dispatched,
    /// Completion candidates, in the order the engine produced them
    Suggestions(Vec<String>),
}

/// Routes command lines for one keyword into the profiler engine.
///
/// Registered with the host once; the engine behind it is looked up per
/// invocation, so it survives disable/enable cycles.
pub struct CommandRouter {
    keyword: String,
    engine: EngineSlot,
    senders: SenderFactory,
}

impl CommandRouter {
    pub fn new(keyword: impl Into<String>, engine: EngineSlot, senders: SenderFactory) -> Self {
        Self {
            keyword: keyword.into(),
            engine,
            senders,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Route one invocation from `source`.
    ///
    /// Returns as soon as the engine has accepted the call; the engine is
    /// responsible for moving long work off the caller's thread.
    pub fn route(
        &self,
        source: Arc<dyn CommandSource>,
        invocation: &Invocation<'_>,
    ) -> RouteResult {
        let Some(args) = arguments(invocation, &self.keyword) else {
            tracing::trace!(input = invocation.input, "declining foreign command line");
            return RouteResult::NotHandled;
        };
        let Some(engine) = self.engine.get() else {
            tracing::trace!(input = invocation.input, "spark is not enabled");
            return RouteResult::NotHandled;
        };

        let sender = Box::new(self.senders.wrap(source));
        match invocation.mode {
            InvocationMode::Execute => {
                engine.execute_command(sender, args);
                RouteResult::Dispatched
            }
            InvocationMode::Suggest => RouteResult::Suggestions(engine.tab_complete(sender, args)),
        }
    }
}

impl CommandHandler for CommandRouter {
    fn execute(&self, source: Arc<dyn CommandSource>, input: &str) {
        self.route(source, &Invocation::execute(input));
    }

    fn suggest(
        &self,
        source: Arc<dyn CommandSource>,
        input: &str,
        builder: &mut dyn SuggestionBuilder,
    ) {
        if let RouteResult::Suggestions(suggestions) =
            self.route(source, &Invocation::suggest(input))
        {
            for suggestion in &suggestions {
                builder.suggest(suggestion);
            }
        }
    }
}
