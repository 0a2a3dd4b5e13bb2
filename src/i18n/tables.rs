use crate::models::{Attendance, DaysSelection, MealChoice};

/// Label text used when rendering the RSVP emails
#[derive(Debug)]
pub struct EmailLabels {
    pub confirmation_subject: &'static str,
    pub notification_subject: &'static str,
    pub greeting: &'static str,
    pub thanks_attending: &'static str,
    pub thanks_not_attending: &'static str,
    pub notification_intro: &'static str,
    pub summary_heading: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub attendance: &'static str,
    pub days: &'static str,
    pub companion: &'static str,
    pub meal: &'static str,
    pub shuttle: &'static str,
    pub dietary: &'static str,
    pub song: &'static str,
    pub message: &'static str,
    pub received_at: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub none_given: &'static str,
    pub attending: &'static str,
    pub not_attending: &'static str,
    pub both_days: &'static str,
    pub single_day: &'static str,
    pub meal_standard: &'static str,
    pub meal_vegetarian: &'static str,
    pub meal_vegan: &'static str,
    pub no_reply_note: &'static str,
    pub reply_hint: &'static str,
    pub sign_off: &'static str,
}

impl EmailLabels {
    pub fn attendance_text(&self, attendance: Attendance) -> &'static str {
        match attendance {
            Attendance::Attending => self.attending,
            Attendance::NotAttending => self.not_attending,
        }
    }

    pub fn days_text(&self, days: DaysSelection) -> &'static str {
        match days {
            DaysSelection::BothDays => self.both_days,
            DaysSelection::SingleDay => self.single_day,
        }
    }

    pub fn meal_text(&self, meal: MealChoice) -> &'static str {
        match meal {
            MealChoice::Standard => self.meal_standard,
            MealChoice::Vegetarian => self.meal_vegetarian,
            MealChoice::Vegan => self.meal_vegan,
        }
    }

    pub fn yes_no(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}

/// Inline messages shown by the RSVP form
#[derive(Debug)]
pub struct FormMessages {
    pub attendance_unset: &'static str,
    pub name_required: &'static str,
    pub email_invalid: &'static str,
    pub companion_name_required: &'static str,
    pub already_submitting: &'static str,
    pub success: &'static str,
    pub generic_error: &'static str,
}

pub(super) static EN_EMAIL: EmailLabels = EmailLabels {
    confirmation_subject: "Thank you for your RSVP!",
    notification_subject: "New RSVP from",
    greeting: "Hi",
    thanks_attending: "We're so happy you can make it! Here is a summary of your response.",
    thanks_not_attending: "We're sorry you can't make it, but thank you for letting us know.",
    notification_intro: "A new response has arrived through the website.",
    summary_heading: "Summary",
    name: "Name",
    email: "Email",
    attendance: "Attendance",
    days: "Days",
    companion: "Companion",
    meal: "Meal",
    shuttle: "Shuttle bus",
    dietary: "Dietary requirements",
    song: "Song request",
    message: "Message",
    received_at: "Received",
    yes: "Yes",
    no: "No",
    none_given: "Not given",
    attending: "Attending",
    not_attending: "Not attending",
    both_days: "Both days",
    single_day: "One day",
    meal_standard: "Standard",
    meal_vegetarian: "Vegetarian",
    meal_vegan: "Vegan",
    no_reply_note: "This mailbox is not monitored, please do not reply to this email.",
    reply_hint: "Reply to this email to reach the guest directly.",
    sign_off: "Warm regards",
};

pub(super) static SV_EMAIL: EmailLabels = EmailLabels {
    confirmation_subject: "Tack för ditt OSA!",
    notification_subject: "Nytt OSA från",
    greeting: "Hej",
    thanks_attending: "Vad roligt att du kommer! Här är en sammanfattning av ditt svar.",
    thanks_not_attending: "Tråkigt att du inte kan komma, men tack för att du hörde av dig.",
    notification_intro: "Ett nytt svar har kommit in via hemsidan.",
    summary_heading: "Sammanfattning",
    name: "Namn",
    email: "E-post",
    attendance: "Närvaro",
    days: "Dagar",
    companion: "Sällskap",
    meal: "Måltid",
    shuttle: "Buss",
    dietary: "Specialkost",
    song: "Låtönskan",
    message: "Meddelande",
    received_at: "Mottaget",
    yes: "Ja",
    no: "Nej",
    none_given: "Ej angivet",
    attending: "Kommer",
    not_attending: "Kommer inte",
    both_days: "Båda dagarna",
    single_day: "En dag",
    meal_standard: "Standard",
    meal_vegetarian: "Vegetarisk",
    meal_vegan: "Vegansk",
    no_reply_note: "Det går inte att svara på detta mejl.",
    reply_hint: "Svara på detta mejl för att nå gästen direkt.",
    sign_off: "Varma hälsningar",
};

pub(super) static EN_FORM: FormMessages = FormMessages {
    attendance_unset: "Please let us know whether you can attend.",
    name_required: "Please enter your name.",
    email_invalid: "Please enter a valid email address.",
    companion_name_required: "Please enter your companion's name.",
    already_submitting: "Your response is already being sent.",
    success: "Thank you! Your response has been sent.",
    generic_error: "Something went wrong. Please try again.",
};

pub(super) static SV_FORM: FormMessages = FormMessages {
    attendance_unset: "Välj om du kommer eller inte.",
    name_required: "Fyll i ditt namn.",
    email_invalid: "Ange en giltig e-postadress.",
    companion_name_required: "Fyll i namnet på ditt sällskap.",
    already_submitting: "Ditt svar skickas redan.",
    success: "Tack! Ditt svar har skickats.",
    generic_error: "Något gick fel. Försök igen.",
};
