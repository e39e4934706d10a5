//! Layer resolution.
//!
//! Layers are walked in include order, exactly as the firmware's preprocessor
//! would see them: a guarded define only takes effect if no earlier layer
//! defined the symbol, an unconditional define always does. With the usual
//! order (user, keymap, framework) this yields
//! `user override > keymap default > framework default`.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::layer::{DefinePolicy, Layer, LayerKind, Value};
use crate::symbol::Symbol;

/// Resolves ordered layers into one symbol table
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    layers: Vec<Layer>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer. Order of calls is include order.
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn resolve(&self) -> Resolution {
        let mut table: BTreeMap<Symbol, Resolved> = BTreeMap::new();
        let mut diagnostics = Vec::new();

        for layer in &self.layers {
            for define in &layer.defines {
                let resolved = Resolved {
                    value: define.value.clone(),
                    layer: layer.name.clone(),
                    kind: layer.kind,
                    policy: define.policy,
                };
                match (table.get(&define.symbol), define.policy) {
                    (None, _) => {
                        debug!("{} = {} from layer {}", define.symbol, define.value, layer.name);
                        table.insert(define.symbol, resolved);
                    }
                    (Some(previous), DefinePolicy::Guarded) => {
                        if previous.value != define.value {
                            diagnostics.push(Diagnostic::SkippedGuard {
                                symbol: define.symbol,
                                value: define.value.clone(),
                                layer: layer.name.clone(),
                                layer_kind: layer.kind,
                                kept_layer: previous.layer.clone(),
                                kept_kind: previous.kind,
                            });
                        }
                    }
                    (Some(previous), DefinePolicy::Unconditional) => {
                        if previous.value != define.value {
                            diagnostics.push(Diagnostic::Redefinition {
                                symbol: define.symbol,
                                previous: previous.value.clone(),
                                previous_layer: previous.layer.clone(),
                                value: define.value.clone(),
                                layer: layer.name.clone(),
                            });
                        }
                        table.insert(define.symbol, resolved);
                    }
                }
            }
        }

        // Symbols of a disabled subsystem never reach any output
        let disabled: Vec<(Symbol, Symbol)> = table
            .keys()
            .filter_map(|symbol| symbol.requires().map(|flag| (*symbol, flag)))
            .filter(|(_, flag)| !matches!(table.get(flag).map(|r| &r.value), Some(Value::Flag(true))))
            .collect();
        for (symbol, requires) in disabled {
            if let Some(removed) = table.remove(&symbol) {
                diagnostics.push(Diagnostic::Disabled {
                    symbol,
                    requires,
                    layer: removed.layer,
                });
            }
        }

        for diagnostic in &diagnostics {
            if diagnostic.is_lost_override() || matches!(diagnostic, Diagnostic::Redefinition { .. }) {
                warn!("{}", diagnostic);
            } else {
                debug!("{}", diagnostic);
            }
        }

        Resolution { table, diagnostics }
    }
}

/// The winning definition of a symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub value: Value,
    /// Name of the layer the value came from
    pub layer: String,
    pub kind: LayerKind,
    pub policy: DefinePolicy,
}

/// Non-fatal findings of a resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// An unconditional define replaced a different earlier value
    Redefinition {
        symbol: Symbol,
        previous: Value,
        previous_layer: String,
        value: Value,
        layer: String,
    },
    /// A guarded define had no effect, an earlier layer already defined a different value
    SkippedGuard {
        symbol: Symbol,
        value: Value,
        layer: String,
        layer_kind: LayerKind,
        kept_layer: String,
        kept_kind: LayerKind,
    },
    /// Dropped because the subsystem's build flag is not enabled
    Disabled {
        symbol: Symbol,
        requires: Symbol,
        layer: String,
    },
}

impl Diagnostic {
    pub fn symbol(&self) -> Symbol {
        match self {
            Diagnostic::Redefinition { symbol, .. }
            | Diagnostic::SkippedGuard { symbol, .. }
            | Diagnostic::Disabled { symbol, .. } => *symbol,
        }
    }

    /// A user or keymap value lost to a framework default, i.e. the framework was included too early
    pub fn is_lost_override(&self) -> bool {
        matches!(
            self,
            Diagnostic::SkippedGuard { layer_kind, kept_kind: LayerKind::Framework, .. }
                if *layer_kind != LayerKind::Framework
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Redefinition {
                symbol,
                previous,
                previous_layer,
                value,
                layer,
            } => write!(
                f,
                "{} redefined by layer {}: {} (was {} from layer {})",
                symbol, layer, value, previous, previous_layer
            ),
            Diagnostic::SkippedGuard {
                symbol,
                value,
                layer,
                kept_layer,
                ..
            } => write!(
                f,
                "{} = {} from layer {} has no effect, already defined by layer {}",
                symbol, value, layer, kept_layer
            ),
            Diagnostic::Disabled { symbol, requires, layer } => write!(
                f,
                "{} from layer {} dropped, {} is not enabled",
                symbol, layer, requires
            ),
        }
    }
}

/// Resolved symbol table plus diagnostics
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    table: BTreeMap<Symbol, Resolved>,
    diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn get(&self, symbol: Symbol) -> Option<&Resolved> {
        self.table.get(&symbol)
    }

    pub fn value(&self, symbol: Symbol) -> Option<&Value> {
        self.table.get(&symbol).map(|r| &r.value)
    }

    pub fn integer(&self, symbol: Symbol) -> Option<i64> {
        self.value(symbol).and_then(Value::as_integer)
    }

    /// Whether a flag is defined. Unset and explicitly false flags are both disabled.
    pub fn is_enabled(&self, symbol: Symbol) -> bool {
        matches!(self.value(symbol), Some(Value::Flag(true)))
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.table.contains_key(&symbol)
    }

    /// Resolved symbols in declaration order of [`Symbol`]
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Resolved)> {
        self.table.iter().map(|(s, r)| (*s, r))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Guards whose value was silently discarded in favour of a framework default
    pub fn lost_overrides(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_lost_override())
    }
}
