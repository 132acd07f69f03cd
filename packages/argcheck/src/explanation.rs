use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use termtree::Tree;

/// Sink for the steps taken while processing a formula. Every message is
/// produced lazily so that [`DiscardedExplanation`] costs nothing.
pub trait Explain {
    fn step<S: Into<String>>(&mut self, step: impl FnOnce() -> S);

    fn subexplanation<S: Into<String>>(&mut self, description: impl FnOnce() -> S) -> &mut Self;

    fn with_subexplanation<S: Into<String>, T>(
        &mut self,
        description: impl FnOnce() -> S,
        function: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let explanation = self.subexplanation(description);
        function(explanation)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EnumAsInner)]
enum ExplanationComponent {
    Step(String),
    Explanation(Explanation),
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct Explanation {
    description: String,
    components: Vec<ExplanationComponent>,
}

impl Explanation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            components: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Steps recorded directly on this node, in order.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .filter_map(|component| component.as_step().map(String::as_str))
    }

    pub fn subexplanations(&self) -> impl Iterator<Item = &Explanation> {
        self.components
            .iter()
            .filter_map(|component| component.as_explanation())
    }

    pub fn get_tree(&self) -> Tree<String> {
        let leaves = self.components.iter().map(|component| match component {
            ExplanationComponent::Step(step) => Tree::new(step.clone()),
            ExplanationComponent::Explanation(explanation) => explanation.get_tree(),
        });

        Tree::new(self.description.clone()).with_leaves(leaves)
    }
}

impl Explain for Explanation {
    fn step<S: Into<String>>(&mut self, step: impl FnOnce() -> S) {
        let step = ExplanationComponent::Step(step().into());

        if self.components.last() != Some(&step) {
            self.components.push(step);
        }
    }

    fn subexplanation<S: Into<String>>(&mut self, description: impl FnOnce() -> S) -> &mut Self {
        self.components
            .push(ExplanationComponent::Explanation(Explanation::new(
                description(),
            )));

        match self.components.last_mut() {
            Some(ExplanationComponent::Explanation(explanation)) => explanation,
            _ => unreachable!("a subexplanation was just pushed"),
        }
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.get_tree())
    }
}

/// Drops every step without formatting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardedExplanation;

impl Explain for DiscardedExplanation {
    fn step<S: Into<String>>(&mut self, _step: impl FnOnce() -> S) {}

    fn subexplanation<S: Into<String>>(&mut self, _description: impl FnOnce() -> S) -> &mut Self {
        self
    }
}
