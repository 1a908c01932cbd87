use super::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge(pub Town, pub Town, pub Weight);

impl WeightedEdge {
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }

    pub fn weight(&self) -> Weight {
        self.2
    }
}

impl From<(Town, Town, Weight)> for WeightedEdge {
    fn from(value: (Town, Town, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Town, Town, Weight)> for WeightedEdge {
    fn from(value: &(Town, Town, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
