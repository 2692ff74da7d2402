//! Runtime addresses of the items a debugger cares about.
//!
//! Same information as the ELF symbol table of the linked binary, collected from inside the
//! process instead of parsed from disk.

use lazy_static::*;
use rustc_hash::FxHashMap;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Object,
    Function,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: &'static str,
    pub kind: SymbolKind,
    pub address: usize,
}

type ReportFn = fn(&mut dyn Write) -> io::Result<i32>;

macro_rules! symbol {
    (static $item: ident as $name: literal) => {
        Symbol {
            name: $name,
            kind: SymbolKind::Object,
            address: ::std::ptr::addr_of!($crate::$item) as usize,
        }
    };
    (fn $item: ident) => {
        Symbol {
            name: stringify!($item),
            kind: SymbolKind::Function,
            address: $crate::$item as ReportFn as usize,
        }
    };
}

lazy_static! {
    static ref SYMBOLS: FxHashMap<&'static str, Symbol> = [
        symbol!(static A as "a"),
        symbol!(fn before_write),
        symbol!(fn after_write),
    ]
    .into_iter()
    .map(|symbol| (symbol.name, symbol))
    .collect();
}

/// Address of the symbol called `name`, if it is known.
pub fn address_of(name: &str) -> Option<usize> {
    SYMBOLS.get(name).map(|symbol| symbol.address)
}

/// All known symbols, lowest address first.
pub fn list() -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = SYMBOLS.values().copied().collect();
    symbols.sort_by_key(|symbol| symbol.address);
    symbols
}

/// Function symbols only, lowest address first.
pub fn list_functions() -> Vec<Symbol> {
    list()
        .into_iter()
        .filter(|symbol| symbol.kind == SymbolKind::Function)
        .collect()
}
