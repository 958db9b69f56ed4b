//! Dispatcher: method name → handler table for one channel

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use super::catalog::{default_methods, MethodMetadata};
use super::{Error, MethodCall, MethodReply, Result};

/// Handler invoked for a registered method
///
/// Handlers hold no mutable state, so a dispatcher can be shared by reference
/// across callers.
pub type MethodHandler = Box<dyn Fn(&MethodCall) -> Result<JsonValue> + Send + Sync>;

/// A method's metadata paired with its handler
pub struct RegisteredMethod {
    metadata: MethodMetadata,
    handler: MethodHandler,
}

impl RegisteredMethod {
    /// Create new registered method
    pub fn new<F>(metadata: MethodMetadata, handler: F) -> Self
    where
        F: Fn(&MethodCall) -> Result<JsonValue> + Send + Sync + 'static,
    {
        Self {
            metadata,
            handler: Box::new(handler),
        }
    }

    /// Get method metadata
    pub fn metadata(&self) -> &MethodMetadata {
        &self.metadata
    }

    /// Run the handler
    pub fn invoke(&self, call: &MethodCall) -> Result<JsonValue> {
        (self.handler)(call)
    }
}

/// Dispatch table for a single channel
pub struct MethodDispatcher {
    /// Channel this dispatcher answers on
    channel: String,
    /// Registered methods by name
    methods: HashMap<String, RegisteredMethod>,
}

impl MethodDispatcher {
    /// Create empty dispatcher
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            methods: HashMap::new(),
        }
    }

    /// Create dispatcher with the built-in methods registered
    pub fn with_default_methods(channel: impl Into<String>) -> Result<Self> {
        let mut dispatcher = Self::new(channel);
        for method in default_methods() {
            dispatcher.register(method)?;
        }
        Ok(dispatcher)
    }

    /// Register a method
    ///
    /// Fails if a method with the same name is already registered.
    pub fn register(&mut self, method: RegisteredMethod) -> Result<()> {
        let name = method.metadata.name.clone();
        if self.methods.contains_key(&name) {
            return Err(Error::DuplicateMethod(name));
        }
        debug!(channel = %self.channel, method = %name, "registered method");
        self.methods.insert(name, method);
        Ok(())
    }

    /// Channel name
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Check if a method is registered
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Metadata for all registered methods, sorted by name
    pub fn methods(&self) -> Vec<&MethodMetadata> {
        let mut all: Vec<&MethodMetadata> = self.methods.values().map(|m| m.metadata()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Dispatch a call to its handler
    ///
    /// Unknown method names yield `NotImplemented`; handler errors become
    /// `Error` replies. Never panics on caller input.
    pub fn dispatch(&self, call: &MethodCall) -> MethodReply {
        if let Some(target) = call.channel.as_deref() {
            if target != self.channel {
                let err = Error::ChannelNotFound(target.to_string());
                warn!(channel = %self.channel, requested = %target, "call addressed to another channel");
                return MethodReply::from(&err);
            }
        }

        let Some(method) = self.methods.get(&call.method) else {
            debug!(method = %call.method, "method not implemented");
            return MethodReply::NotImplemented;
        };

        debug!(method = %call.method, "dispatching method call");
        match method.invoke(call) {
            Ok(result) => MethodReply::Success { result },
            Err(err) => {
                debug!(method = %call.method, error = %err, "method call failed");
                MethodReply::from(&err)
            }
        }
    }
}
