use crate::core::Specification;
use crate::domain::model::{Customer, CustomerRecord};

/// Matches records against a template: only non-empty template fields constrain.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    name: Option<String>,
    city: Option<String>,
}

impl CustomerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_template(template: &CustomerRecord) -> Self {
        Self::new()
            .with_name(&template.name)
            .with_city(&template.city)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = non_empty(name);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = non_empty(city);
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Specification<CustomerRecord> for CustomerFilter {
    fn is_satisfied_by(&self, item: &CustomerRecord) -> bool {
        let name_ok = self.name.as_ref().map_or(true, |name| *name == item.name);
        let city_ok = self.city.as_ref().map_or(true, |city| *city == item.city);
        name_ok && city_ok
    }
}

/// Customers whose email is hosted on the given domain (exact match after the `@`).
#[derive(Debug, Clone)]
pub struct EmailDomain {
    suffix: String,
}

impl EmailDomain {
    pub fn new(domain: &str) -> Self {
        Self {
            suffix: format!("@{}", domain.trim_start_matches('@')),
        }
    }
}

impl Specification<Customer> for EmailDomain {
    fn is_satisfied_by(&self, item: &Customer) -> bool {
        item.email().ends_with(&self.suffix)
    }
}

/// Adapts a closure into a [`Specification`].
pub struct FnSpecification<F> {
    predicate: F,
}

pub fn spec_fn<T, F>(predicate: F) -> FnSpecification<F>
where
    F: Fn(&T) -> bool,
{
    FnSpecification { predicate }
}

impl<T, F> Specification<T> for FnSpecification<F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

pub struct And<A, B>(A, B);
pub struct Or<A, B>(A, B);
pub struct Not<A>(A);

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.0.is_satisfied_by(item) && self.1.is_satisfied_by(item)
    }
}

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.0.is_satisfied_by(item) || self.1.is_satisfied_by(item)
    }
}

impl<T, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        !self.0.is_satisfied_by(item)
    }
}

pub trait SpecificationExt<T>: Specification<T> + Sized {
    fn and<B: Specification<T>>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    fn or<B: Specification<T>>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T, S: Specification<T>> SpecificationExt<T> for S {}
