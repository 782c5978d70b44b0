//! Printing cakes as TypeScript-like type expressions.

use std::collections::HashMap;

use crate::cake::{Cake, Dispatch, StringifyContext};

/// Prints cakes, caching by identity. A cake reached again while it is
/// still being printed renders as `[Circular]`; named cakes always print as
/// their name.
#[derive(Default)]
pub struct CakeStringifier {
    // `None` while the cake is being printed.
    cache: HashMap<Cake, Option<String>>,
}

impl CakeStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify(&mut self, cake: &Cake) -> String {
        self.visit(cake)
    }

    fn visit(&mut self, cake: &Cake) -> String {
        if let Some(name) = cake.name() {
            return name.to_string();
        }
        match self.cache.get(cake) {
            Some(Some(done)) => return done.clone(),
            Some(None) => return "[Circular]".to_string(),
            None => {}
        }
        self.cache.insert(cake.clone(), None);
        let out = cake.kind().dispatch_stringify(self);
        self.cache.insert(cake.clone(), Some(out.clone()));
        out
    }
}

impl StringifyContext for CakeStringifier {
    fn recurse(&mut self, cake: &Cake) -> String {
        self.visit(cake)
    }
}

// ------------------------------- Tests ------------------------------------ //
