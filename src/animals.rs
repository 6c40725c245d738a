//! Pattern 3: Single-Level Inheritance
//!
//! The base class becomes a trait: it names the capability but gives it no
//! body, so only the concrete variants can be instantiated. Each variant
//! overrides `make_sound` with its fixed call.

/// The shared interface of every animal: a name set at construction and a
/// sound specific to the variant.
pub trait Animal {
    fn name(&self) -> &str;
    fn make_sound(&self) -> &'static str;
}

pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Dog { name: name.into() }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> &'static str {
        "Woof!"
    }
}

pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Cat { name: name.into() }
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> &'static str {
        "Meow!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog() {
        let dog = Dog::new("Wang");
        assert_eq!(dog.name(), "Wang");
        assert_eq!(dog.make_sound(), "Woof!");
    }

    #[test]
    fn test_cat() {
        let cat = Cat::new("Mao");
        assert_eq!(cat.name(), "Mao");
        assert_eq!(cat.make_sound(), "Meow!");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let dog = Dog::new("");
        assert_eq!(dog.name(), "");
        assert_eq!(dog.make_sound(), "Woof!");
    }

    #[test]
    fn test_dynamic_dispatch() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(Dog::new("Buddy")),
            Box::new(Cat::new("Whiskers")),
        ];
        let sounds: Vec<&str> = animals.iter().map(|a| a.make_sound()).collect();
        assert_eq!(sounds, vec!["Woof!", "Meow!"]);
    }
}
