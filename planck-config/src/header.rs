//! `config.h` generation.
//!
//! The header carries every symbol the user or keymap layers decided. Values
//! that came from the framework layer are left out, the framework defines them
//! itself. Guarded symbols keep their `#ifndef` guard so a board-level header
//! included earlier still wins.

use crate::layer::{DefinePolicy, LayerKind, Value};
use crate::resolve::{Resolution, Resolved};
use crate::symbol::{Subsystem, Symbol};

/// Render the resolution as a C header
pub fn render(resolution: &Resolution) -> String {
    let mut out = String::new();
    out.push_str("// Generated by planck-config, do not edit.\n");
    out.push_str("#pragma once\n");

    let audio = emitted(resolution, Subsystem::Audio);
    if !audio.is_empty() {
        out.push_str("\n#ifdef AUDIO_ENABLE\n");
        for (symbol, resolved) in audio {
            render_define(&mut out, symbol, resolved, "    ");
        }
        out.push_str("#endif\n");
    }

    let midi = emitted(resolution, Subsystem::Midi);
    if !midi.is_empty() {
        out.push_str("\n/*\n * MIDI options\n */\n");
        for (symbol, resolved) in midi {
            render_define(&mut out, symbol, resolved, "");
        }
    }

    let encoder = emitted(resolution, Subsystem::Encoder);
    if !encoder.is_empty() {
        out.push_str("\n// encoder parameters\n");
        for (symbol, resolved) in encoder {
            render_define(&mut out, symbol, resolved, "");
        }
    }

    let mouse_key = emitted(resolution, Subsystem::MouseKey);
    if !mouse_key.is_empty() {
        out.push_str("\n// mouse speed parameters\n");
        for (symbol, resolved) in mouse_key {
            render_define(&mut out, symbol, resolved, "");
        }
    }

    out
}

fn emitted(resolution: &Resolution, subsystem: Subsystem) -> Vec<(Symbol, &Resolved)> {
    resolution
        .iter()
        .filter(|(symbol, resolved)| {
            symbol.subsystem() == subsystem && !symbol.is_build_flag() && resolved.kind != LayerKind::Framework
        })
        .collect()
}

fn render_define(out: &mut String, symbol: Symbol, resolved: &Resolved, indent: &str) {
    let body = match &resolved.value {
        // Explicitly disabled flags stay visible, commented out
        Value::Flag(false) => {
            out.push_str(&format!("{indent}// #define {symbol}\n"));
            return;
        }
        Value::Flag(true) => format!("#define {symbol}"),
        value => format!("#define {symbol} {value}"),
    };
    match resolved.policy {
        DefinePolicy::Guarded => {
            out.push_str(&format!("{indent}#ifndef {symbol}\n"));
            out.push_str(&format!("{indent}{body}\n"));
            out.push_str(&format!("{indent}#endif\n"));
        }
        DefinePolicy::Unconditional => out.push_str(&format!("{indent}{body}\n")),
    }
}
