//! Shared field set for the student add and edit forms.

use std::collections::HashMap;

use eduboard_domain::student::{Gender, StudentForm};
use leptos::prelude::*;

use super::form::{SelectField, TextField, TextareaField};

const RELIGIONS: &[&str] = &[
    "Islam",
    "Kristen Protestan",
    "Katolik",
    "Hindu",
    "Buddha",
    "Konghucu",
];

const LAST_EDUCATIONS: &[&str] = &["SD", "SMP", "SMA", "SMK", "D3", "S1"];

const TRAINING_LOCATIONS: &[&str] = &["Manado", "Tomohon", "Bitung", "Tondano", "Kotamobagu"];

fn gender_options() -> Vec<(String, String)> {
    vec![
        (Gender::Male.to_string(), "Laki-laki".to_string()),
        (Gender::Female.to_string(), "Perempuan".to_string()),
    ]
}

/// Wire/display pairs with a leading prompt option carrying a blank value,
/// so an untouched select still fails the required rule.
fn options_from(prompt: &str, values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((String::new(), prompt.to_string()))
        .chain(values.iter().map(|v| ((*v).to_string(), (*v).to_string())))
        .collect()
}

/// All fourteen student fields bound to one form signal.
///
/// `errors` maps field names to their first validation message; fields
/// absent from the map render clean.
#[component]
pub fn StudentFields(
    form: RwSignal<StudentForm>,
    #[prop(into)] errors: Signal<HashMap<String, String>>,
) -> impl IntoView {
    let error_for =
        move |field: &'static str| Signal::derive(move || errors.with(|map| map.get(field).cloned()));

    view! {
        <TextField
            label="Nama"
            placeholder="Nama Siswa"
            value=Signal::derive(move || form.with(|f| f.name.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.name = v))
            error=error_for("name")
        />
        <SelectField
            label="Jenis Kelamin"
            options=gender_options()
            value=Signal::derive(move || form.with(|f| f.gender.to_string()))
            on_change=Callback::new(move |v: String| {
                form.update(|f| f.gender = v.parse().unwrap_or_default());
            })
            error=error_for("gender")
        />
        <TextField
            label="Tempat Lahir"
            placeholder="Tempat Lahir Siswa"
            value=Signal::derive(move || form.with(|f| f.place_of_birth.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.place_of_birth = v))
            error=error_for("place_of_birth")
        />
        <TextField
            label="Tanggal Lahir"
            placeholder="Tanggal Lahir Siswa"
            input_type="date"
            value=Signal::derive(move || form.with(|f| f.date_of_birth.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.date_of_birth = v))
            error=error_for("date_of_birth")
        />
        <TextareaField
            label="Alamat"
            placeholder="Alamat Siswa"
            value=Signal::derive(move || form.with(|f| f.address.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.address = v))
            error=error_for("address")
        />
        <TextField
            label="Nomor Telepon"
            placeholder="Nomor Telepon Siswa"
            value=Signal::derive(move || form.with(|f| f.phone_number.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.phone_number = v))
            error=error_for("phone_number")
        />
        <TextField
            label="Email"
            placeholder="Email Siswa"
            value=Signal::derive(move || form.with(|f| f.email.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.email = v))
            error=error_for("email")
        />
        <SelectField
            label="Pendidikan Terakhir"
            options=options_from("Pilih Pendidikan Terakhir", LAST_EDUCATIONS)
            value=Signal::derive(move || form.with(|f| f.last_education.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.last_education = v))
            error=error_for("last_education")
        />
        <TextField
            label="Nama Sekolah"
            placeholder="Nama Sekolah Siswa"
            value=Signal::derive(move || form.with(|f| f.school_name.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.school_name = v))
            error=error_for("school_name")
        />
        <TextField
            label="Tahun Lulus"
            placeholder="Tahun Lulus Siswa"
            input_type="number"
            value=Signal::derive(move || {
                form.with(|f| {
                    if f.graduation_year == 0 {
                        String::new()
                    } else {
                        f.graduation_year.to_string()
                    }
                })
            })
            on_change=Callback::new(move |v: String| {
                form.update(|f| f.graduation_year = v.parse().unwrap_or(0));
            })
            error=error_for("graduation_year")
        />
        <TextField
            label="Nomor Ijazah\u{2F}Sertifikat"
            placeholder="Nomor Ijazah\u{2F}Sertifikat Siswa"
            value=Signal::derive(move || form.with(|f| f.certificate.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.certificate = v))
            error=error_for("certificate")
        />
        <TextField
            label="NIK"
            placeholder="Nomor Induk Kependudukan Siswa"
            value=Signal::derive(move || form.with(|f| f.nik.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.nik = v))
            error=error_for("nik")
        />
        <SelectField
            label="Agama"
            options=options_from("Pilih Agama", RELIGIONS)
            value=Signal::derive(move || form.with(|f| f.religion.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.religion = v))
            error=error_for("religion")
        />
        <SelectField
            label="Lokasi Pelatihan"
            options=options_from("Pilih Lokasi Pelatihan", TRAINING_LOCATIONS)
            value=Signal::derive(move || form.with(|f| f.training_location.clone()))
            on_change=Callback::new(move |v| form.update(|f| f.training_location = v))
            error=error_for("training_location")
        />
    }
}
