//! Genetic operators over parametric models.

use crate::ga::{Genetics, ParentGroup, Population};
use crate::random::RandomSource;

use super::function::ParametricFunction;
use super::model::ParametricModel;

const DEFAULT_MUTATION_SIZE: f64 = 0.1;

/// A population of [`ParametricModel`]s evolving over a shared function
/// template.
pub type ParametricPopulation = Population<ParametricGenetics>;

/// Domain operators for populations of parametric models:
///
/// - **Initialization**: every model gets an independent copy of the
///   template; each searchable parameter (`min < max`) is drawn uniformly
///   from its range, fixed parameters keep the template value.
/// - **Crossover**: gene-wise; each parameter is passed from either
///   parent, chosen by a fair coin per parameter (not a single crossover
///   point). A single-parent group copies that parent's vector verbatim.
/// - **Mutation**: one parameter is picked uniformly at random and, if
///   searchable, perturbed by Gaussian noise scaled relative to its
///   current value. The result is not clamped back into the declared
///   bounds: mutation may move a parameter outside its initialization
///   range.
pub struct ParametricGenetics {
    template: Box<dyn ParametricFunction>,
    mutation_size: f64,
}

impl ParametricGenetics {
    /// Creates the operators over a function template.
    pub fn new(template: Box<dyn ParametricFunction>) -> Self {
        Self {
            template,
            mutation_size: DEFAULT_MUTATION_SIZE,
        }
    }

    /// Sets the relative size (sigma) of the Gaussian noise applied during
    /// mutation.
    ///
    /// The perturbation sigma is `relative_size * |value|`, or
    /// `relative_size` itself when the current value is exactly 0.
    pub fn set_mutation_size(&mut self, relative_size: f64) {
        self.mutation_size = relative_size;
    }

    /// The relative mutation size.
    pub fn mutation_size(&self) -> f64 {
        self.mutation_size
    }

    /// The function template shared by all created models.
    pub fn template(&self) -> &dyn ParametricFunction {
        self.template.as_ref()
    }
}

impl Genetics for ParametricGenetics {
    type Individual = ParametricModel;

    fn initialize(&self, n: usize, rng: &mut RandomSource) -> Vec<ParametricModel> {
        (0..n)
            .map(|_| {
                let mut function = self.template.clone_box();
                for p in 0..function.parameter_count() {
                    let (min, max) = function.bounds(p);
                    if min < max {
                        function.set_parameter(p, rng.uniform_real(min, max));
                    }
                }
                ParametricModel::new(function)
            })
            .collect()
    }

    fn crossover(
        &self,
        individuals: &mut [ParametricModel],
        parents: &[ParentGroup],
        rng: &mut RandomSource,
    ) {
        // Parents are population members about to be overwritten: collect
        // every offspring's parameter vector before applying any of them.
        let offspring: Vec<Vec<f64>> = parents
            .iter()
            .map(|group| match *group {
                ParentGroup::Single(p) => individuals[p].parameters(),
                ParentGroup::Pair(p1, p2) => {
                    let first = individuals[p1].function();
                    let second = individuals[p2].function();
                    (0..first.parameter_count())
                        .map(|p| {
                            if rng.uniform_int(2) == 1 {
                                first.parameter(p)
                            } else {
                                second.parameter(p)
                            }
                        })
                        .collect()
                }
            })
            .collect();

        for (individual, genes) in individuals.iter_mut().zip(offspring) {
            let function = individual.function_mut();
            for (p, value) in genes.into_iter().enumerate() {
                function.set_parameter(p, value);
            }
        }
    }

    fn mutate(&self, individual: &mut ParametricModel, rng: &mut RandomSource) {
        let function = individual.function_mut();
        let count = function.parameter_count();
        if count == 0 {
            return;
        }

        let p = rng.uniform_int(count);
        let (min, max) = function.bounds(p);
        if min < max {
            let value = function.parameter(p);
            let sigma = if value == 0.0 {
                self.mutation_size
            } else {
                self.mutation_size * value.abs()
            };
            function.set_parameter(p, value + rng.gaussian(0.0, sigma));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FnFunction;

    fn sum_function(bounds: &[(f64, f64)]) -> FnFunction<fn(&[f64], &[f64]) -> f64> {
        fn eval(p: &[f64], _x: &[f64]) -> f64 {
            p.iter().sum()
        }
        let mut f = FnFunction::new(bounds.len(), eval as fn(&[f64], &[f64]) -> f64);
        for (i, &(min, max)) in bounds.iter().enumerate() {
            f = f.with_bounds(i, min, max);
        }
        f
    }

    fn genetics(bounds: &[(f64, f64)]) -> ParametricGenetics {
        ParametricGenetics::new(Box::new(sum_function(bounds)))
    }

    #[test]
    fn test_initialize_draws_within_bounds() {
        let g = genetics(&[(0.0, 1.0), (-4.0, -2.0)]);
        let mut rng = RandomSource::new(42);

        for model in g.initialize(100, &mut rng) {
            let p0 = model.function().parameter(0);
            let p1 = model.function().parameter(1);
            assert!((0.0..1.0).contains(&p0), "p0 = {p0}");
            assert!((-4.0..-2.0).contains(&p1), "p1 = {p1}");
        }
    }

    #[test]
    fn test_initialize_leaves_fixed_parameters_at_template_value() {
        let template = sum_function(&[(1.0, 1.0), (0.0, 10.0)]).with_parameter(0, 7.5);
        let g = ParametricGenetics::new(Box::new(template));
        let mut rng = RandomSource::new(42);

        for model in g.initialize(20, &mut rng) {
            assert_eq!(model.function().parameter(0), 7.5);
        }
    }

    #[test]
    fn test_initialized_models_are_independent() {
        let g = genetics(&[(0.0, 1.0)]);
        let mut rng = RandomSource::new(1);
        let mut models = g.initialize(2, &mut rng);

        let other = models[1].function().parameter(0);
        models[0].function_mut().set_parameter(0, 555.0);
        assert_eq!(models[1].function().parameter(0), other);
    }

    #[test]
    fn test_crossover_single_group_copies_parent_verbatim() {
        let g = genetics(&[(0.0, 100.0), (0.0, 100.0), (0.0, 100.0)]);
        let mut rng = RandomSource::new(9);
        let mut models = g.initialize(3, &mut rng);
        let elite = models[2].parameters();

        let groups = [
            ParentGroup::Single(2),
            ParentGroup::Pair(0, 1),
            ParentGroup::Pair(1, 0),
        ];
        g.crossover(&mut models, &groups, &mut rng);

        assert_eq!(models[0].parameters(), elite);
    }

    #[test]
    fn test_crossover_pair_takes_each_gene_from_either_parent() {
        let g = genetics(&[(0.0, 1.0); 8]);
        let mut rng = RandomSource::new(3);

        let mut models = g.initialize(3, &mut rng);
        for p in 0..8 {
            models[0].function_mut().set_parameter(p, 1.0 + p as f64);
            models[1].function_mut().set_parameter(p, 100.0 + p as f64);
        }

        let groups = [
            ParentGroup::Single(0),
            ParentGroup::Single(1),
            ParentGroup::Pair(0, 1),
        ];
        g.crossover(&mut models, &groups, &mut rng);

        let child = models[2].parameters();
        for (p, &value) in child.iter().enumerate() {
            let a = 1.0 + p as f64;
            let b = 100.0 + p as f64;
            assert!(
                value == a || value == b,
                "gene {p} = {value} came from neither parent"
            );
        }
    }

    #[test]
    fn test_mutate_changes_exactly_one_parameter() {
        let g = genetics(&[(0.0, 10.0), (0.0, 10.0), (0.0, 10.0)]);
        let mut rng = RandomSource::new(5);
        let mut models = g.initialize(1, &mut rng);

        let before = models[0].parameters();
        g.mutate(&mut models[0], &mut rng);
        let after = models[0].parameters();

        let changed = before
            .iter()
            .zip(&after)
            .filter(|(b, a)| b != a)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_mutate_skips_fixed_parameters() {
        // The only parameter is fixed: mutation must leave it alone.
        let template = sum_function(&[(5.0, 5.0)]).with_parameter(0, 3.0);
        let g = ParametricGenetics::new(Box::new(template));
        let mut rng = RandomSource::new(5);
        let mut models = g.initialize(1, &mut rng);

        for _ in 0..50 {
            g.mutate(&mut models[0], &mut rng);
        }
        assert_eq!(models[0].function().parameter(0), 3.0);
    }

    #[test]
    fn test_mutate_can_leave_declared_bounds() {
        // A searchable parameter sitting far above its range: the Gaussian
        // perturbation is relative to the value, so the result stays far
        // outside [0, 1]. No clamping happens.
        let mut g = genetics(&[(0.0, 1.0)]);
        g.set_mutation_size(1e-6);
        let mut rng = RandomSource::new(5);
        let mut models = g.initialize(1, &mut rng);
        models[0].function_mut().set_parameter(0, 1000.0);

        g.mutate(&mut models[0], &mut rng);

        let value = models[0].function().parameter(0);
        let (min, max) = models[0].function().bounds(0);
        assert!(
            value > max && value > min,
            "mutated value {value} was clamped into bounds"
        );
    }

    #[test]
    fn test_mutate_at_zero_uses_absolute_sigma() {
        let mut g = genetics(&[(-1.0, 1.0)]);
        g.set_mutation_size(0.5);
        let mut rng = RandomSource::new(11);
        let mut models = g.initialize(1, &mut rng);
        models[0].function_mut().set_parameter(0, 0.0);

        g.mutate(&mut models[0], &mut rng);

        // sigma 0.5 * |0| would freeze the parameter forever; the
        // absolute fallback keeps it moving.
        assert_ne!(models[0].function().parameter(0), 0.0);
    }

    #[test]
    fn test_mutate_with_no_parameters_is_noop() {
        let g = genetics(&[]);
        let mut rng = RandomSource::new(2);
        let mut models = g.initialize(1, &mut rng);
        g.mutate(&mut models[0], &mut rng); // must not draw an index from an empty range
    }

    #[test]
    fn test_default_mutation_size() {
        let g = genetics(&[(0.0, 1.0)]);
        assert!((g.mutation_size() - 0.1).abs() < 1e-12);
        assert_eq!(g.template().parameter_count(), 1);
    }
}
