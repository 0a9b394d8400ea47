use locator_wait_domain::LocatorDescriptor;

use crate::usecases::ports::Driver;
use crate::usecases::ports::DriverError;
use crate::usecases::ports::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCondition {
    Visible,
    NotVisible,
    VisibleAndEnabled,
}

impl ElementCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCondition::Visible => "visible",
            ElementCondition::NotVisible => "not_visible",
            ElementCondition::VisibleAndEnabled => "visible_and_enabled",
        }
    }
}

/// Result of one probe. `Met` carries the element when the condition is about
/// an element being there.
#[derive(Debug)]
pub enum Evaluation<E> {
    Met(Option<E>),
    Unmet,
}

impl<E> Evaluation<E> {
    pub fn is_met(&self) -> bool {
        matches!(self, Evaluation::Met(_))
    }
}

/// Looks the element up once and checks `condition` against it.
///
/// A missing element fails `Visible` and `VisibleAndEnabled` with the driver's
/// `NoSuchElement` error, which polls treat as "not yet". For `NotVisible` a
/// missing element satisfies the condition.
pub fn evaluate<D: Driver + ?Sized>(
    driver: &D,
    locator: &LocatorDescriptor,
    condition: ElementCondition,
) -> Result<Evaluation<D::Element>, DriverError> {
    match condition {
        ElementCondition::Visible => {
            let element = driver.find_element(locator)?;
            if element.is_displayed()? {
                Ok(Evaluation::Met(Some(element)))
            } else {
                Ok(Evaluation::Unmet)
            }
        }
        ElementCondition::NotVisible => match driver.find_element(locator) {
            Ok(element) => match element.is_displayed() {
                Ok(true) => Ok(Evaluation::Unmet),
                Ok(false) => Ok(Evaluation::Met(None)),
                Err(err) if err.is_transient() => Ok(Evaluation::Met(None)),
                Err(err) => Err(err),
            },
            Err(err) if err.is_transient() => Ok(Evaluation::Met(None)),
            Err(err) => Err(err),
        },
        ElementCondition::VisibleAndEnabled => {
            let element = driver.find_element(locator)?;
            if element.is_displayed()? && element.is_enabled()? {
                Ok(Evaluation::Met(Some(element)))
            } else {
                Ok(Evaluation::Unmet)
            }
        }
    }
}
