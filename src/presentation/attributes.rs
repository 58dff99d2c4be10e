//! Conversions from what a host hands over (an element's `dataset` or a
//! plain object) into [`HookAttributes`].

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomStringMap;

use crate::domain::{errors::AppError, market_data::HookAttributes};

/// Every `data-*` attribute of the element, camelCased by the browser.
pub fn attributes_from_dataset(dataset: &DomStringMap) -> HookAttributes {
    let object: &Object = dataset.as_ref();
    Object::keys(object)
        .iter()
        .filter_map(|key| key.as_string())
        .filter_map(|key| dataset.get(&key).map(|value| (key, value)))
        .collect()
}

/// Own enumerable properties of a plain object.
///
/// `null` and `undefined` values count as absent keys; numbers and booleans
/// are stringified the way a `data-*` attribute would carry them.
pub fn attributes_from_object(value: &JsValue) -> Result<HookAttributes, AppError> {
    let object = value
        .dyn_ref::<Object>()
        .ok_or_else(|| AppError::Config("attributes must be an object".to_string()))?;

    let mut attributes = HookAttributes::new();
    for key in Object::keys(object).iter() {
        let Some(name) = key.as_string() else { continue };
        let entry = Reflect::get(object, &key).unwrap_or(JsValue::UNDEFINED);
        if let Some(text) = stringify(&entry) {
            attributes.insert(name, text);
        }
    }
    Ok(attributes)
}

fn stringify(value: &JsValue) -> Option<String> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .or_else(|| value.as_bool().map(|b| b.to_string()))
}
