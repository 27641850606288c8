//! Lexical scope context
//!
//! Passed by value through the recursive walk; entering a function
//! definition creates a new context, leaving it restores the caller's.

/// Current function and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeContext<'a> {
    pub function: &'a str,
    pub params: &'a [String],
}

impl<'a> ScopeContext<'a> {
    /// Module level: no enclosing function
    pub fn module_level() -> Self {
        Self {
            function: "",
            params: &[],
        }
    }

    pub fn function(function: &'a str, params: &'a [String]) -> Self {
        Self { function, params }
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
    }

    pub fn is_module_level(&self) -> bool {
        self.function.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_params() {
        let params = vec!["shared".to_string(), "n".to_string()];
        let scope = ScopeContext::function("worker", &params);
        assert!(scope.has_param("shared"));
        assert!(!scope.has_param("other"));
        assert!(!scope.is_module_level());
        assert!(ScopeContext::module_level().is_module_level());
    }
}
