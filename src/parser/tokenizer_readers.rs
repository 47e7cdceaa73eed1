// Методы чтения токенов для общего токенизатора

impl Tokenizer<'_> {
    /// Читает слово
    pub(crate) fn read_word(&mut self) -> PrimitiveKind {
        // Первый символ уже проверен по word_start
        self.advance();

        while let Some(ch) = self.peek() {
            if !self.config.word_chars.contains(&ch) {
                break;
            }
            self.advance();
        }

        PrimitiveKind::Word
    }

    /// Проверяет, начинается ли в текущей позиции число
    pub(crate) fn at_number_start(&self) -> bool {
        match self.peek() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('.') => matches!(self.peek_ahead(1), Some(ch) if ch.is_ascii_digit()),
            _ => false,
        }
    }

    /// Читает числовой литерал
    ///
    /// Маркер экспоненты `e`/`E` поглощается всегда, даже без последующих цифр:
    /// `.12e` это одно число.
    pub(crate) fn read_number(&mut self) -> PrimitiveKind {
        let mut seen_dot = false;

        if self.peek() == Some('.') {
            seen_dot = true;
            self.advance();
        }
        self.skip_digits();

        if !seen_dot && self.peek() == Some('.') {
            self.advance();
            self.skip_digits();
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            self.advance();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.advance();
            }
            self.skip_digits();
        }

        PrimitiveKind::Number
    }

    /// Читает однострочный комментарий вместе с переводом строки
    pub(crate) fn read_line_comment(&mut self) -> PrimitiveKind {
        self.position += self.line_comment.len();

        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }

        PrimitiveKind::LineComment
    }

    /// Читает блочный комментарий с учетом вложенности
    pub(crate) fn read_block_comment(&mut self) -> PrimitiveKind {
        self.position += self.block_opening.len();
        let mut depth = 1usize;

        while self.position < self.input.len() && depth > 0 {
            if self.matches(&self.block_opening) {
                depth += 1;
                self.position += self.block_opening.len();
            } else if self.matches(&self.block_closing) {
                depth -= 1;
                self.position += self.block_closing.len();
            } else {
                self.advance();
            }
        }

        PrimitiveKind::BlockComment
    }

    /// Читает литерал в разделителях
    ///
    /// Удвоенный закрывающий символ считается экранированным и не завершает литерал.
    pub(crate) fn read_delimited_literal(&mut self, closing: char) -> PrimitiveKind {
        self.advance();

        while let Some(ch) = self.peek() {
            if ch == closing {
                if self.peek_ahead(1) == Some(closing) {
                    self.position += 2;
                    continue;
                }
                self.advance();
                break;
            }
            self.advance();
        }

        PrimitiveKind::DelimitedLiteral
    }

    /// Читает оператор или разделитель
    pub(crate) fn read_operator_or_delimiter(&mut self) -> PrimitiveKind {
        let current = self.advance();

        if let Some(next) = self.peek() {
            if self.operators2chars.contains(&(current, next)) {
                self.advance();
                return PrimitiveKind::Operator;
            }
        }

        if self.config.operators1char.contains(&current) {
            PrimitiveKind::Operator
        } else {
            PrimitiveKind::Delimiter
        }
    }

    // === Вспомогательные методы ===

    /// Возвращает текущий символ и продвигает позицию
    pub(crate) fn advance(&mut self) -> char {
        if self.position >= self.input.len() {
            return '\0';
        }

        let ch = self.input[self.position];
        self.position += 1;
        ch
    }

    /// Возвращает текущий символ без продвижения позиции
    pub(crate) fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Возвращает символ на определенном расстоянии от текущей позиции
    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Проверяет, совпадает ли текст в текущей позиции с образцом
    pub(crate) fn matches(&self, pattern: &[char]) -> bool {
        self.input[self.position..].starts_with(pattern)
    }

    /// Пропускает пробельные символы
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Пропускает последовательность цифр
    pub(crate) fn skip_digits(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.advance();
        }
    }
}
