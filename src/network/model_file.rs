//! Plain-text model format.
//!
//! For each layer, input side first:
//!
//! ```text
//! <unit_count> <fan_in>
//! <bias> <weight_0> ... <weight_{fan_in-1}>     (one line per unit)
//! ```
//!
//! Values are written with `f64`'s shortest round-trip formatting, so a saved
//! model reloads bit for bit. The reader only relies on whitespace between
//! tokens, not on line structure.

use std::io::{self, Write};
use std::str::{FromStr, SplitWhitespace};

use crate::error::{NetError, Result};
use crate::layers::{Layer, Unit};

pub(crate) fn write_layers<W: Write>(out: &mut W, layers: &[Layer]) -> io::Result<()> {
    for layer in layers {
        writeln!(out, "{} {}", layer.size(), layer.fan_in())?;
        for unit in layer.units() {
            write!(out, "{}", unit.bias())?;
            for w in unit.weights() {
                write!(out, " {}", w)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Parses `layer_count` layers and checks they chain from `input_size` down
/// to a single output unit.
pub(crate) fn read_layers(text: &str, input_size: usize, layer_count: usize) -> Result<Vec<Layer>> {
    let mut tokens = Tokens { inner: text.split_whitespace(), position: 0 };
    let mut layers = Vec::with_capacity(layer_count);
    let mut expected_fan_in = input_size;

    for index in 0..layer_count {
        let size: usize = tokens.next(|| format!("unit count of layer {index}"))?;
        let fan_in: usize = tokens.next(|| format!("fan-in of layer {index}"))?;
        if size == 0 {
            return Err(NetError::MalformedModel(format!("layer {index} has no units")));
        }
        if fan_in != expected_fan_in {
            return Err(NetError::MalformedModel(format!(
                "layer {index} has fan-in {fan_in}, expected {expected_fan_in}"
            )));
        }

        // `size` comes from the file; units are only allocated as they parse.
        let mut units = Vec::new();
        for u in 0..size {
            let bias: f64 = tokens.next(|| format!("bias of unit {u} in layer {index}"))?;
            let weights = (0..fan_in)
                .map(|w| tokens.next(|| format!("weight {w} of unit {u} in layer {index}")))
                .collect::<Result<Vec<f64>>>()?;
            units.push(Unit::from_parts(weights, bias));
        }
        layers.push(Layer::from_units(units));
        expected_fan_in = size;
    }

    if expected_fan_in != 1 {
        return Err(NetError::MalformedModel(format!(
            "output layer has {expected_fan_in} units, expected 1"
        )));
    }
    if let Some(extra) = tokens.inner.next() {
        return Err(NetError::MalformedModel(format!(
            "unexpected trailing token '{extra}' after {} values",
            tokens.position
        )));
    }
    Ok(layers)
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| {
            NetError::MalformedModel(format!("unexpected end of file reading {}", what()))
        })?;
        self.position += 1;
        token.parse().map_err(|_| {
            NetError::MalformedModel(format!("invalid value '{token}' for {}", what()))
        })
    }
}
