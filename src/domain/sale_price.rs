use std::num::IntErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalePrice(i32);

impl SalePrice{
    pub fn parse(price: &str) -> Result<SalePrice, String>{
        let trimmed = price.trim();

        if trimmed.is_empty(){
            return Err("Sale price must not be empty".to_string())
        }

        match trimmed.parse::<i32>(){
            Ok(value) => Ok(Self(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(format!(
                    "Sale price {} is out of range, it must be between {} and {}",
                    trimmed, i32::MIN, i32::MAX
                )),
                _ => Err(format!("Sale price must be a whole number, got {:?}", trimmed))
            }
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
