// Neutral mixed-integer model representation handed to the oracle

/// Index of a decision variable inside a `MipModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// Kind and bounds of a decision variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarKind {
    Binary,
    Continuous { lb: f64, ub: f64 },
}

/// A named decision variable
#[derive(Debug, Clone)]
pub struct VarDef {
    pub name: String,
    pub kind: VarKind,
}

/// Sparse linear expression over model variables
#[derive(Debug, Clone, Default)]
pub struct LinExpr {
    pub terms: Vec<(VarId, f64)>,
}

impl LinExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expression consisting of a single variable
    pub fn single(var: VarId) -> Self {
        Self {
            terms: vec![(var, 1.0)],
        }
    }

    /// Appends a term to the expression
    pub fn add(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    /// Builder-style variant of `add`
    pub fn with(mut self, var: VarId, coefficient: f64) -> Self {
        self.add(var, coefficient);
        self
    }

    /// Evaluates the expression against a variable assignment
    pub fn eval(&self, assignment: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coefficient)| coefficient * assignment[var.0])
            .sum()
    }
}

/// Comparison operator of a linear constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Le,
    Ge,
    Eq,
}

/// `lhs <op> rhs` over model variables
#[derive(Debug, Clone)]
pub struct LinConstraint {
    pub lhs: LinExpr,
    pub cmp: Cmp,
    pub rhs: f64,
}

/// A minimize-objective mixed-integer program: variables, linear
/// constraints and a linear objective. Variable ids are dense and
/// assigned in creation order, so rebuilding the same model yields
/// the same ids.
#[derive(Debug, Clone, Default)]
pub struct MipModel {
    vars: Vec<VarDef>,
    constraints: Vec<LinConstraint>,
    objective: LinExpr,
}

impl MipModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binary variable and returns its id
    pub fn add_binary(&mut self, name: String) -> VarId {
        self.push_var(VarDef {
            name,
            kind: VarKind::Binary,
        })
    }

    /// Adds a bounded continuous variable and returns its id.
    /// Infinite bounds mean unbounded on that side.
    pub fn add_continuous(&mut self, name: String, lb: f64, ub: f64) -> VarId {
        self.push_var(VarDef {
            name,
            kind: VarKind::Continuous { lb, ub },
        })
    }

    fn push_var(&mut self, def: VarDef) -> VarId {
        let id = VarId(self.vars.len());
        self.vars.push(def);
        id
    }

    /// Adds the constraint `lhs <op> rhs`
    pub fn add_constraint(&mut self, lhs: LinExpr, cmp: Cmp, rhs: f64) {
        self.constraints.push(LinConstraint { lhs, cmp, rhs });
    }

    /// Sets the minimize objective
    pub fn minimize(&mut self, objective: LinExpr) {
        self.objective = objective;
    }

    pub fn vars(&self) -> &[VarDef] {
        &self.vars
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    pub fn constraints(&self) -> &[LinConstraint] {
        &self.constraints
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective(&self) -> &LinExpr {
        &self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_ids_are_dense_and_ordered() {
        let mut model = MipModel::new();
        let a = model.add_binary("a".to_string());
        let b = model.add_continuous("b".to_string(), 0.0, 10.0);

        assert_eq!(a, VarId(0));
        assert_eq!(b, VarId(1));
        assert_eq!(model.var_count(), 2);
        assert_eq!(model.vars()[1].kind, VarKind::Continuous { lb: 0.0, ub: 10.0 });
    }

    #[test]
    fn test_expression_eval() {
        let expr = LinExpr::new().with(VarId(0), 2.0).with(VarId(2), -1.0);
        assert_eq!(expr.eval(&[3.0, 100.0, 4.0]), 2.0);
    }

    #[test]
    fn test_constraints_are_recorded() {
        let mut model = MipModel::new();
        let a = model.add_binary("a".to_string());
        model.add_constraint(LinExpr::single(a), Cmp::Le, 1.0);
        model.minimize(LinExpr::single(a));

        assert_eq!(model.constraint_count(), 1);
        assert_eq!(model.constraints()[0].cmp, Cmp::Le);
        assert_eq!(model.objective().terms.len(), 1);
    }
}
