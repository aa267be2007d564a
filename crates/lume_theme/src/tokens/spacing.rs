//! Spacing tokens for theming

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Spacing scale built from a base unit (4px by default)
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl SpacingTokens {
    /// Scale of 1, 2, 4, 6, 8 and 12 base units
    pub fn with_base(unit: f32) -> Self {
        Self {
            xs: unit,
            sm: unit * 2.0,
            md: unit * 4.0,
            lg: unit * 6.0,
            xl: unit * 8.0,
            xxl: unit * 12.0,
        }
    }

    /// Get spacing by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::with_base(4.0)
    }
}
