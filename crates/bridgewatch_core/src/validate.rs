use crate::error::AppError;
use crate::model::{Device, Personnel};

/// Checks a device serial typed into the personnel form.
///
/// Blank passes (binding is optional). `editing` is the id of the person being
/// edited, whose own binding does not count as a conflict.
pub fn device_binding(
    sn: &str,
    editing: Option<&str>,
    devices: &[Device],
    personnel: &[Personnel],
) -> Result<(), AppError> {
    let sn = sn.trim();
    if sn.is_empty() {
        return Ok(());
    }

    if !devices.iter().any(|device| device.sn == sn) {
        return Err(AppError::invalid_input(format!("device SN {sn} not found")));
    }

    let taken = personnel.iter().any(|person| {
        person.bound_device_sn.as_deref() == Some(sn) && Some(person.id.as_str()) != editing
    });
    if taken {
        return Err(AppError::invalid_input(format!(
            "device {sn} already bound to another person"
        )));
    }

    Ok(())
}

/// Required fields of the personnel form. The phone must be a mainland mobile
/// number: 11 digits, `1` then `3`-`9`.
pub fn personnel_form(name: &str, phone: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("name is required"));
    }
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(AppError::invalid_input("phone is required"));
    }
    if !is_mobile_number(phone) {
        return Err(AppError::invalid_input(format!("invalid phone number {phone}")));
    }
    Ok(())
}

fn is_mobile_number(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes.iter().all(u8::is_ascii_digit)
}
