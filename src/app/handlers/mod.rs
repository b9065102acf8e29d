//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod editing;
