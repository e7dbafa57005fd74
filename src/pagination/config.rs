use crate::config::settings::DEFAULT_PAGE_SIZE;
use crate::errors::SweepError;

/// One bounded window over the record set.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    pub size: usize,
    pub number: usize,
}

impl PageSpec {
    pub fn new() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            number: 1,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_number(mut self, number: usize) -> Self {
        self.number = number;
        self
    }

    pub fn validate(&self) -> Result<(), SweepError> {
        if self.size == 0 {
            return Err(SweepError::Configuration(
                "page size must be at least 1".to_string(),
            ));
        }
        if self.number == 0 {
            return Err(SweepError::Configuration(
                "page number must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn offset(&self) -> usize {
        (self.number - 1) * self.size
    }

    pub fn advance(&mut self) {
        self.number += 1;
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageSpec::new();
        assert_eq!(page.size, 100);
        assert_eq!(page.number, 1);
    }

    #[test]
    fn test_offset_arithmetic() {
        assert_eq!(PageSpec::new().offset(), 0);
        assert_eq!(PageSpec::new().with_number(2).offset(), 100);
        assert_eq!(PageSpec::new().with_size(5).with_number(4).offset(), 15);
    }

    #[test]
    fn test_advance_increments_number() {
        let mut page = PageSpec::new().with_size(5);
        page.advance();
        page.advance();
        assert_eq!(page.number, 3);
        assert_eq!(page.offset(), 10);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(PageSpec::new().with_size(0).validate().is_err());
    }

    #[test]
    fn test_zero_number_rejected() {
        assert!(PageSpec::new().with_number(0).validate().is_err());
    }
}
