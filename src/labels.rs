//! Bilingual text for every module.

use crate::core::CalcError;
use crate::display::Language;
use crate::format::format_trimmed;

pub struct AppLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub nothing_to_share: &'static str,
    pub kd: &'static str,
    pub fils: &'static str,
    pub shares: &'static str,
    pub pending: &'static str,
    pub reduction_out_of_range: &'static str,
    pub negative_input: &'static str,
}

/// Help text per form field, keyed by field name
pub type FieldHelp = &'static [(&'static str, &'static str)];

/// "How to use" card for a calculator
pub struct Guide {
    pub title: &'static str,
    pub tips: &'static [&'static str],
    pub example: &'static str,
}

pub struct ExPriceLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: &'static str,
    pub closing_price: &'static str,
    pub bonus_percent: &'static str,
    pub increase_percent: &'static str,
    pub reduction_percent: &'static str,
    pub subscription_price: &'static str,
    pub adjusted_price: &'static str,
    pub price_range: &'static str,
    pub original_price: &'static str,
    pub share_heading: &'static str,
    pub kind_none: &'static str,
    pub kind_bonus: &'static str,
    pub kind_increase: &'static str,
    pub kind_reduction: &'static str,
    pub kind_all: &'static str,
    pub help: FieldHelp,
    pub guide: Guide,
}

pub struct DividendLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub share_count: &'static str,
    pub cash_dividend: &'static str,
    pub bonus_percent: &'static str,
    pub total_cash: &'static str,
    pub bonus_shares: &'static str,
    pub final_shares: &'static str,
    pub share_heading: &'static str,
    pub help: FieldHelp,
    pub guide: Guide,
}

pub struct AverageCostLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub current_qty: &'static str,
    pub current_price: &'static str,
    pub buy_qty: &'static str,
    pub buy_price: &'static str,
    pub total_quantity: &'static str,
    pub total_cost: &'static str,
    pub new_average_price: &'static str,
    pub guidance: &'static str,
    pub share_heading: &'static str,
    pub help: FieldHelp,
    pub guide: Guide,
}

pub fn app(language: Language) -> &'static AppLabels {
    match language {
        Language::Ar => &APP_AR,
        Language::En => &APP_EN,
    }
}

pub fn ex_price(language: Language) -> &'static ExPriceLabels {
    match language {
        Language::Ar => &EX_PRICE_AR,
        Language::En => &EX_PRICE_EN,
    }
}

pub fn dividend(language: Language) -> &'static DividendLabels {
    match language {
        Language::Ar => &DIVIDEND_AR,
        Language::En => &DIVIDEND_EN,
    }
}

pub fn average_cost(language: Language) -> &'static AverageCostLabels {
    match language {
        Language::Ar => &AVERAGE_COST_AR,
        Language::En => &AVERAGE_COST_EN,
    }
}

pub fn field_help(help: FieldHelp, field: &str) -> Option<&'static str> {
    help.iter()
        .find(|(name, _)| *name == field)
        .map(|(_, text)| *text)
}

/// Message for a rejected calculation in the display language.
pub fn error(language: Language, err: &CalcError) -> String {
    let t = app(language);
    match err {
        CalcError::ReductionOutOfRange(pct) => format!(
            "{} {}%",
            t.reduction_out_of_range,
            format_trimmed(*pct, language, 2)
        ),
        CalcError::NegativeInput { field } => {
            let fields = average_cost(language);
            let name = match *field {
                "current_qty" => fields.current_qty,
                "current_price" => fields.current_price,
                "buy_qty" => fields.buy_qty,
                "buy_price" => fields.buy_price,
                other => other,
            };
            format!("{}: {}", name, t.negative_input)
        }
    }
}

static APP_AR: AppLabels = AppLabels {
    title: "حاسبة بورصة الكويت",
    subtitle: "التفسيخات والتوزيعات ومتوسط التكلفة",
    footer: "حاسبة بورصة الكويت - أداة احترافية للحسابات المالية",
    copy: "نسخ النتيجة",
    copied: "تم النسخ بنجاح!",
    copy_failed: "تعذر النسخ",
    nothing_to_share: "لا توجد نتيجة للمشاركة بعد",
    kd: "د.ك",
    fils: "فلس",
    shares: "سهم",
    pending: "تم تعديل المدخلات، اضغط على \"احسب\" لتحديث النتائج",
    reduction_out_of_range: "يجب أن تكون نسبة تخفيض رأس المال أقل من ١٠٠%، القيمة المدخلة:",
    negative_input: "لا يمكن أن تكون القيمة سالبة",
};

static APP_EN: AppLabels = AppLabels {
    title: "Kuwait Bourse Calculator",
    subtitle: "Ex-Price, Dividends & Average Cost",
    footer: "Kuwait Bourse Calculator - Professional Financial Tool",
    copy: "Copy Result",
    copied: "Copied successfully!",
    copy_failed: "Copy failed",
    nothing_to_share: "No result to share yet",
    kd: "KD",
    fils: "fils",
    shares: "shares",
    pending: "Inputs changed, click \"Calculate\" to update the results",
    reduction_out_of_range: "Capital reduction must be below 100%, entered:",
    negative_input: "value must not be negative",
};

static EX_PRICE_AR: ExPriceLabels = ExPriceLabels {
    title: "حاسبة سعر التفسيخ",
    subtitle: "احسب السعر المعدل بعد التوزيعات والتغييرات الرأسمالية",
    kind: "نوع التعديل",
    closing_price: "سعر الإغلاق (CP)",
    bonus_percent: "نسبة أسهم المنحة (B%)",
    increase_percent: "زيادة رأس المال (CI%)",
    reduction_percent: "تخفيض رأس المال (CR%)",
    subscription_price: "سعر الاكتتاب (SP)",
    adjusted_price: "السعر المعدل",
    price_range: "نطاق الأسعار",
    original_price: "السعر الأصلي",
    share_heading: "نتائج حساب سعر التفسيخ:",
    kind_none: "بدون تعديل",
    kind_bonus: "أسهم منحة",
    kind_increase: "زيادة رأس المال",
    kind_reduction: "تخفيض رأس المال",
    kind_all: "جميع التعديلات",
    help: &[
        ("kind", "نوع الإجراء المؤسسي المطلوب تطبيقه على السعر"),
        ("closing_price", "سعر إغلاق السهم قبل الإجراء المؤسسي بالفلس"),
        ("bonus_percent", "نسبة أسهم المنحة الموزعة (8 تعني 8%)"),
        ("increase_percent", "نسبة الأسهم الجديدة المطروحة في زيادة رأس المال"),
        ("subscription_price", "سعر الاكتتاب للسهم الجديد بالفلس"),
        ("reduction_percent", "نسبة تخفيض رأس المال، تدخل كرقم موجب"),
    ],
    guide: Guide {
        title: "كيفية استخدام حاسبة التفسيخ",
        tips: &[
            "أدخل سعر الإغلاق قبل التعديل",
            "أدخل نسبة أسهم المنحة إن وجدت (مثال: 8 لـ 8%)",
            "في حالة زيادة رأس المال، أدخل النسبة وسعر الاكتتاب",
            "شاهد السعر المعدل ونطاق 107 خطوة تلقائياً",
        ],
        example: "مثال: سهم بسعر 775 فلس مع منحة 8% ← السعر بعد التفسيخ: 717.593 فلس",
    },
};

static EX_PRICE_EN: ExPriceLabels = ExPriceLabels {
    title: "Ex-Price Calculator",
    subtitle: "Calculate adjusted price after distributions",
    kind: "Adjustment",
    closing_price: "Closing Price (CP)",
    bonus_percent: "Bonus % (B%)",
    increase_percent: "Capital Increase (CI%)",
    reduction_percent: "Capital Reduction (CR%)",
    subscription_price: "Subscription Price (SP)",
    adjusted_price: "Adjusted Price",
    price_range: "Price Range",
    original_price: "Original Price",
    share_heading: "Ex-price calculation results:",
    kind_none: "None",
    kind_bonus: "Bonus shares",
    kind_increase: "Capital increase",
    kind_reduction: "Capital reduction",
    kind_all: "All adjustments",
    help: &[
        ("kind", "Which corporate actions to apply to the price"),
        ("closing_price", "Closing price of the share before the corporate action, in fils"),
        ("bonus_percent", "Percentage of bonus shares distributed (8 for 8%)"),
        ("increase_percent", "Percentage of new shares offered in the capital increase"),
        ("subscription_price", "Price paid per new share in the capital increase, in fils"),
        ("reduction_percent", "Capital reduction percentage, entered as a positive number"),
    ],
    guide: Guide {
        title: "How to Use Ex-Price Calculator",
        tips: &[
            "Enter the closing price before adjustment",
            "Enter bonus percentage if any (example: 8 for 8%)",
            "For capital increase, enter percentage and subscription price",
            "View adjusted ex-price and 107-step range automatically",
        ],
        example: "Example: Stock at 775 fils with 8% bonus → Ex-Price: 717.593 fils",
    },
};

static DIVIDEND_AR: DividendLabels = DividendLabels {
    title: "حاسبة التوزيعات",
    subtitle: "احسب التوزيعات النقدية وأسهم المنحة",
    share_count: "عدد الأسهم (NS)",
    cash_dividend: "التوزيع النقدي (CD) - فلس",
    bonus_percent: "نسبة المنحة (B%)",
    total_cash: "إجمالي التوزيعات",
    bonus_shares: "أسهم المنحة",
    final_shares: "إجمالي الأسهم",
    share_heading: "نتائج حساب التوزيعات:",
    help: &[
        ("share_count", "إجمالي عدد الأسهم التي تمتلكها في هذا السهم"),
        ("cash_dividend", "مبلغ التوزيع النقدي لكل سهم بالفلس"),
        ("bonus_percent", "نسبة أسهم المنحة المئوية التي سيتم توزيعها"),
    ],
    guide: Guide {
        title: "كيفية استخدام حاسبة التوزيعات",
        tips: &[
            "أدخل عدد الأسهم المملوكة",
            "أدخل التوزيع النقدي لكل سهم بالفلس",
            "أدخل نسبة أسهم المنحة إن وجدت",
            "شاهد إجمالي النقد وأسهم المنحة والأسهم النهائية",
        ],
        example: "مثال: 100,000 سهم × 12 فلس + منحة 8% ← نقد: 1,200 د.ك + 8,000 سهم منحة",
    },
};

static DIVIDEND_EN: DividendLabels = DividendLabels {
    title: "Dividend Calculator",
    subtitle: "Calculate cash dividends and bonus shares",
    share_count: "Number of Shares (NS)",
    cash_dividend: "Cash Dividend (CD) - fils",
    bonus_percent: "Bonus % (B%)",
    total_cash: "Total Cash",
    bonus_shares: "Bonus Shares",
    final_shares: "Final Shares",
    share_heading: "Dividend calculation results:",
    help: &[
        ("share_count", "Total number of shares you own in this stock"),
        ("cash_dividend", "The cash dividend amount per share in fils"),
        ("bonus_percent", "The percentage of bonus shares to be distributed"),
    ],
    guide: Guide {
        title: "How to Use Dividend Calculator",
        tips: &[
            "Enter the number of shares you own",
            "Enter cash dividend per share in fils",
            "Enter bonus percentage if any",
            "View total cash, bonus shares, and final shareholding",
        ],
        example: "Example: 100,000 shares × 12 fils + 8% bonus → Cash: 1,200 KD + 8,000 bonus shares",
    },
};

static AVERAGE_COST_AR: AverageCostLabels = AverageCostLabels {
    title: "حاسبة متوسط التكلفة",
    subtitle: "احسب متوسط السعر الجديد بعد شراء أسهم إضافية",
    current_qty: "الكمية الحالية",
    current_price: "المتوسط الحالي",
    buy_qty: "الكمية المراد شراؤها",
    buy_price: "سعر الشراء",
    total_quantity: "إجمالي الكمية",
    total_cost: "إجمالي الكلفة",
    new_average_price: "المتوسط الجديد",
    guidance: "أدخل البيانات واضغط على \"احسب\" لعرض النتائج",
    share_heading: "نتائج حساب متوسط التكلفة:",
    help: &[
        ("current_qty", "إجمالي عدد الأسهم التي تمتلكها حاليًا قبل الصفقة الجديدة"),
        ("current_price", "متوسط التكلفة الحالي للسهم الواحد لهذا السهم"),
        ("buy_qty", "عدد الأسهم الإضافية التي تخطط لشرائها"),
        ("buy_price", "السعر للسهم الواحد في هذه الصفقة الجديدة"),
    ],
    guide: Guide {
        title: "كيفية استخدام حاسبة متوسط التكلفة",
        tips: &[
            "أدخل الكمية الحالية ومتوسط تكلفتها",
            "أدخل الكمية المراد شراؤها وسعر الشراء",
            "اضغط على \"احسب\" لعرض المتوسط الجديد",
        ],
        example: "مثال: 1,000 سهم بسعر 0.500 + 500 سهم بسعر 0.600 ← المتوسط الجديد: 0.533 د.ك",
    },
};

static AVERAGE_COST_EN: AverageCostLabels = AverageCostLabels {
    title: "Average Cost Calculator",
    subtitle: "Calculate the new average price after buying additional shares",
    current_qty: "Current Quantity",
    current_price: "Current Average",
    buy_qty: "Quantity to Buy",
    buy_price: "Purchase Price",
    total_quantity: "Total Quantity",
    total_cost: "Total Cost",
    new_average_price: "New Average Price",
    guidance: "Enter the data and click \"Calculate\" to view results",
    share_heading: "Average cost calculation results:",
    help: &[
        ("current_qty", "Total number of shares you already own before this new trade"),
        ("current_price", "Your current average cost per share for this stock"),
        ("buy_qty", "How many additional shares you plan to purchase"),
        ("buy_price", "The price per share you expect to pay in this new transaction"),
    ],
    guide: Guide {
        title: "How to Use Average Cost Calculator",
        tips: &[
            "Enter the shares you already own and their average cost",
            "Enter the quantity you plan to buy and its price",
            "Click \"Calculate\" to view the new average price",
        ],
        example: "Example: 1,000 shares at 0.500 + 500 shares at 0.600 → New average: 0.533 KD",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AverageCostForm, DividendForm, ExPriceForm, FormField, FormFields};

    fn covers(help: FieldHelp, fields: &[FormField]) -> bool {
        fields.iter().all(|f| field_help(help, f.name).is_some())
    }

    #[test]
    fn every_form_field_has_help_in_both_languages() {
        for language in [Language::Ar, Language::En] {
            assert!(covers(ex_price(language).help, ExPriceForm::fields()));
            assert!(covers(dividend(language).help, DividendForm::fields()));
            assert!(covers(average_cost(language).help, AverageCostForm::fields()));
        }
    }

    #[test]
    fn help_follows_language() {
        assert_eq!(
            field_help(dividend(Language::En).help, "cash_dividend"),
            Some("The cash dividend amount per share in fils")
        );
        assert_eq!(
            field_help(dividend(Language::Ar).help, "cash_dividend"),
            Some("مبلغ التوزيع النقدي لكل سهم بالفلس")
        );
        assert_eq!(field_help(dividend(Language::En).help, "unknown"), None);
    }

    #[test]
    fn reduction_error_in_arabic() {
        let message = error(Language::Ar, &CalcError::ReductionOutOfRange(100.0));
        assert!(message.starts_with("يجب أن تكون نسبة تخفيض رأس المال"));
        assert!(message.ends_with("١٠٠%"));
        assert!(!message.contains("capital"));
    }

    #[test]
    fn reduction_error_in_english() {
        assert_eq!(
            error(Language::En, &CalcError::ReductionOutOfRange(120.5)),
            "Capital reduction must be below 100%, entered: 120.5%"
        );
    }

    #[test]
    fn negative_input_names_the_field() {
        let err = CalcError::NegativeInput { field: "buy_price" };
        assert_eq!(
            error(Language::En, &err),
            "Purchase Price: value must not be negative"
        );
        assert!(error(Language::Ar, &err).starts_with("سعر الشراء"));
    }
}
